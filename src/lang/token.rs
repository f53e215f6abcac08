use super::{Column, LineNumber};
use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
);

/// A lexeme and its classification. The position is where it was scanned.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    text: String,
    kind: Kind,
    line: LineNumber,
    column: Column,
}

impl Token {
    pub fn new<S: Into<String>>(kind: Kind, text: S, line: LineNumber, column: Column) -> Token {
        Token {
            text: text.into(),
            kind,
            line,
            column,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    pub fn column(&self) -> &Column {
        &self.column
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Eof | Kind::Newline => write!(f, "{}", self.kind),
            Kind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Eof,
    Newline,
    Number,
    Ident,
    String,
    Word(Word),
    Operator(Operator),
}

impl Kind {
    pub fn is_comparison_operator(self) -> bool {
        match self {
            Kind::Operator(op) => op.is_comparison(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Eof => write!(f, "end of input"),
            Newline => write!(f, "newline"),
            Number => write!(f, "number"),
            Ident => write!(f, "identifier"),
            String => write!(f, "string"),
            Word(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Reserved words. Matching is exact and case-sensitive.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    Endif,
    While,
    Repeat,
    Endwhile,
}

impl Word {
    pub const ALL: [Word; 11] = [
        Word::Label,
        Word::Goto,
        Word::Print,
        Word::Input,
        Word::Let,
        Word::If,
        Word::Then,
        Word::Endif,
        Word::While,
        Word::Repeat,
        Word::Endwhile,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Label => "LABEL",
            Goto => "GOTO",
            Print => "PRINT",
            Input => "INPUT",
            Let => "LET",
            If => "IF",
            Then => "THEN",
            Endif => "ENDIF",
            While => "WHILE",
            Repeat => "REPEAT",
            Endwhile => "ENDWHILE",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_comparison(self) -> bool {
        use Operator::*;
        match self {
            EqualEqual | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Equal | Plus | Minus | Multiply | Divide => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            EqualEqual => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
