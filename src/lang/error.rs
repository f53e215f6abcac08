use super::{Column, LineNumber};

pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $($arg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($arg)+))
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr, ..$col:expr; $($arg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message(format!($($arg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: String) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

/// Where in the pipeline an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Grammar,
    Semantic,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownToken,
    IllegalNumber,
    IllegalString,
    UnterminatedString,
    ExpectedNotEqual,
    SyntaxError,
    UndeclaredVariable,
    DuplicateLabel,
    UndeclaredLabel,
    ReservedName,
    UsageError,
    FileNotFound,
    DiskIoError,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnknownToken | IllegalNumber | IllegalString | UnterminatedString
            | ExpectedNotEqual => ErrorKind::Lexical,
            SyntaxError => ErrorKind::Grammar,
            UndeclaredVariable | DuplicateLabel | UndeclaredLabel | ReservedName => {
                ErrorKind::Semantic
            }
            UsageError | FileNotFound | DiskIoError => ErrorKind::Io,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            UnknownToken => "UNKNOWN TOKEN",
            IllegalNumber => "ILLEGAL NUMBER",
            IllegalString => "ILLEGAL CHARACTER IN STRING",
            UnterminatedString => "UNTERMINATED STRING",
            ExpectedNotEqual => "EXPECTED !=",
            SyntaxError => "SYNTAX ERROR",
            UndeclaredVariable => "UNDECLARED VARIABLE",
            DuplicateLabel => "DUPLICATE LABEL",
            UndeclaredLabel => "UNDECLARED LABEL",
            ReservedName => "RESERVED NAME",
            UsageError => "USAGE ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "{} IN{}", self.code, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
