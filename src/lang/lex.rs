use super::token::{Kind, Operator, Token, Word};
use super::{Column, Error, LineNumber};
use crate::error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;
type Chars<'a> =
    std::iter::Peekable<std::iter::Chain<std::str::Chars<'a>, std::iter::Once<char>>>;

/// Scan all of `s`, ending with the end-of-input token.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(s);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        let eof = token.kind() == Kind::Eof;
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}

fn is_fishy_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_fishy_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_fishy_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_fishy_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_forbidden_in_string(c: char) -> bool {
    c == '\r' || c == '\n' || c == '\t' || c == '\\' || c == '%'
}

/// Pull-based scanner. The source is read as if it ended with one extra
/// newline; `ch` is `None` once that newline has been consumed.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    ch: Option<char>,
    line: LineNumber,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut chars = source.chars().chain(std::iter::once('\n')).peekable();
        let ch = chars.next();
        Lexer {
            chars,
            ch,
            line: 1,
            col: 0,
        }
    }

    /// Returns the next token. Once end of input is reached every further
    /// call returns end of input again.
    pub fn next_token(&mut self) -> Result<Token> {
        self.whitespace();
        self.comment();
        let start = self.col;
        let token = match self.ch {
            None => Token::new(Kind::Eof, "", self.line, start..start),
            Some('\n') => {
                let token = Token::new(Kind::Newline, "\n", self.line, start..start + 1);
                self.next_char();
                token
            }
            Some(ch @ '+') | Some(ch @ '-') | Some(ch @ '*') | Some(ch @ '/') => {
                self.arithmetic(ch)
            }
            Some(ch @ '=') | Some(ch @ '<') | Some(ch @ '>') | Some(ch @ '!') => {
                self.relational(ch)?
            }
            Some('"') => self.string()?,
            Some(ch) if is_fishy_digit(ch) => self.number()?,
            Some(ch) if is_fishy_alphabetic(ch) => self.alphabetic(),
            Some(ch) => {
                return Err(error!(UnknownToken, self.line, ..&(start..start + 1);
                    "unknown token {:?}", ch));
            }
        };
        trace!("{}:{:?} {:?}", token.line(), token.column(), token.kind());
        Ok(token)
    }

    fn next_char(&mut self) {
        match self.ch {
            Some('\n') => {
                self.line += 1;
                self.col = 0;
            }
            Some(_) => self.col += 1,
            None => return,
        }
        self.ch = self.chars.next();
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn span(&self, start: usize) -> Column {
        start..self.col
    }

    fn whitespace(&mut self) {
        while self.ch.map_or(false, is_fishy_whitespace) {
            self.next_char();
        }
    }

    fn comment(&mut self) {
        if self.ch != Some('#') {
            return;
        }
        while self.ch.is_some() && self.ch != Some('\n') {
            self.next_char();
        }
    }

    fn arithmetic(&mut self, ch: char) -> Token {
        let start = self.col;
        let op = match ch {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' => Operator::Multiply,
            _ => Operator::Divide,
        };
        self.next_char();
        Token::new(Kind::Operator(op), ch.to_string(), self.line, self.span(start))
    }

    fn relational(&mut self, ch: char) -> Result<Token> {
        let start = self.col;
        let equal = self.peek() == Some('=');
        let op = match (ch, equal) {
            ('=', true) => Operator::EqualEqual,
            ('=', false) => Operator::Equal,
            ('<', true) => Operator::LessEqual,
            ('<', false) => Operator::Less,
            ('>', true) => Operator::GreaterEqual,
            ('>', false) => Operator::Greater,
            ('!', true) => Operator::NotEqual,
            ('!', false) => {
                let got = match self.peek() {
                    Some('\n') | None => String::from("end of line"),
                    Some(c) => format!("{:?}", c),
                };
                return Err(error!(ExpectedNotEqual, self.line, ..&(start..start + 1);
                    "expected != but found ! followed by {}", got));
            }
            _ => {
                return Err(error!(UnknownToken, self.line, ..&(start..start + 1);
                    "unknown token {:?}", ch));
            }
        };
        self.next_char();
        if equal {
            self.next_char();
        }
        Ok(Token::new(
            Kind::Operator(op),
            op.to_string(),
            self.line,
            self.span(start),
        ))
    }

    fn string(&mut self) -> Result<Token> {
        let line = self.line;
        let start = self.col;
        let mut s = String::new();
        self.next_char();
        loop {
            match self.ch {
                None | Some('\n') => {
                    return Err(error!(UnterminatedString, line, ..&self.span(start);
                        "string is missing its closing quote"));
                }
                Some('"') => break,
                Some(ch) if is_forbidden_in_string(ch) => {
                    return Err(error!(IllegalString, line, ..&(self.col..self.col + 1);
                        "{:?} is not allowed in a string", ch));
                }
                Some(ch) => {
                    s.push(ch);
                    self.next_char();
                }
            }
        }
        self.next_char();
        Ok(Token::new(Kind::String, s, line, self.span(start)))
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        self.digits(&mut s);
        if self.ch == Some('.') {
            s.push('.');
            self.next_char();
            if !self.ch.map_or(false, is_fishy_digit) {
                return Err(error!(IllegalNumber, self.line, ..&self.span(start);
                    "expected a digit after the decimal point in {}", s));
            }
            self.digits(&mut s);
        }
        Ok(Token::new(Kind::Number, s, self.line, self.span(start)))
    }

    fn digits(&mut self, s: &mut String) {
        while let Some(ch) = self.ch.filter(|c| is_fishy_digit(*c)) {
            s.push(ch);
            self.next_char();
        }
    }

    fn alphabetic(&mut self) -> Token {
        let start = self.col;
        let mut s = String::new();
        while let Some(ch) = self.ch.filter(|c| is_fishy_alphanumeric(*c)) {
            s.push(ch);
            self.next_char();
        }
        let kind = match Word::from_string(&s) {
            Some(word) => Kind::Word(word),
            None => Kind::Ident,
        };
        Token::new(kind, s, self.line, self.span(start))
    }
}
