use super::token::{Kind, Operator, Token, Word};
use super::{Error, Lexer};
use crate::emit::Emitter;
use crate::error;
use log::trace;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Error>;

/// C keywords and the names the generated `main` relies on.
const C_RESERVED: [&str; 37] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "main", "printf", "scanf",
];

fn is_reserved_in_c(name: &str) -> bool {
    C_RESERVED.contains(&name)
}

/// Translate `source` in a single pass, appending C to `emitter`.
/// The emitter is left partially filled when an error is returned.
pub fn parse(source: &str, emitter: &mut Emitter) -> Result<()> {
    Parser::new(source, emitter)?.program()
}

struct Parser<'a, 'e> {
    lexer: Lexer<'a>,
    emitter: &'e mut Emitter,
    cur_token: Token,
    peek_token: Token,
    symbols: HashSet<String>,
    labels_declared: HashSet<String>,
    labels_gotoed: Vec<Token>,
}

impl<'a, 'e> Parser<'a, 'e> {
    fn new(source: &'a str, emitter: &'e mut Emitter) -> Result<Parser<'a, 'e>> {
        let mut lexer = Lexer::new(source);
        let cur_token = lexer.next_token()?;
        let peek_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            emitter,
            cur_token,
            peek_token,
            symbols: HashSet::new(),
            labels_declared: HashSet::new(),
            labels_gotoed: vec![],
        })
    }

    fn check_token(&self, kind: Kind) -> bool {
        self.cur_token.kind() == kind
    }

    fn check_operator(&self, ops: &[Operator]) -> bool {
        match self.cur_token.kind() {
            Kind::Operator(op) => ops.contains(&op),
            _ => false,
        }
    }

    /// Shifts the lookahead window and hands back the token that left it.
    fn next_token(&mut self) -> Result<Token> {
        let token = self.lexer.next_token()?;
        Ok(std::mem::replace(
            &mut self.cur_token,
            std::mem::replace(&mut self.peek_token, token),
        ))
    }

    fn expected(&self, kind: Kind) -> Error {
        error!(SyntaxError, self.cur_token.line(), ..self.cur_token.column();
            "expected {}, found {}", kind, self.cur_token)
    }

    fn expect(&mut self, kind: Kind) -> Result<Token> {
        if !self.check_token(kind) {
            return Err(self.expected(kind));
        }
        self.next_token()
    }

    fn ident(&mut self) -> Result<Token> {
        self.expect(Kind::Ident)
    }

    /// An identifier that becomes a C variable or label name.
    fn name(&mut self) -> Result<Token> {
        if self.check_token(Kind::Ident) && is_reserved_in_c(self.cur_token.text()) {
            return Err(error!(ReservedName, self.cur_token.line(), ..self.cur_token.column();
                "{} is reserved in the generated C", self.cur_token.text()));
        }
        self.ident()
    }

    // program ::= {statement}
    fn program(mut self) -> Result<()> {
        trace!("PROGRAM");
        self.emitter.header_line("#include <stdio.h>");
        self.emitter.header_line("int main(void){");

        while self.check_token(Kind::Newline) {
            self.next_token()?;
        }
        while !self.check_token(Kind::Eof) {
            self.statement()?;
        }

        self.emitter.emit_line("return 0;");
        self.emitter.emit_line("}");

        for label in &self.labels_gotoed {
            if !self.labels_declared.contains(label.text()) {
                return Err(error!(UndeclaredLabel, label.line(), ..label.column();
                    "GOTO {} names a label that is never declared", label.text()));
            }
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        match self.cur_token.kind() {
            Kind::Word(Word::Print) => self.r#print()?,
            Kind::Word(Word::If) => self.r#if()?,
            Kind::Word(Word::While) => self.r#while()?,
            Kind::Word(Word::Label) => self.r#label()?,
            Kind::Word(Word::Goto) => self.r#goto()?,
            Kind::Word(Word::Let) => self.r#let()?,
            Kind::Word(Word::Input) => self.r#input()?,
            _ => {
                return Err(error!(SyntaxError, self.cur_token.line(), ..self.cur_token.column();
                    "invalid statement at {} ({})", self.cur_token, self.cur_token.kind()));
            }
        }
        self.nl()
    }

    // "PRINT" (expression | string)
    fn r#print(&mut self) -> Result<()> {
        trace!("STATEMENT-PRINT");
        self.next_token()?;
        if self.check_token(Kind::String) {
            let text = self.next_token()?;
            self.emitter
                .emit_line(&format!("printf(\"{}\\n\");", text.text()));
        } else {
            self.emitter.emit("printf(\"%.2f\\n\", (float)(");
            self.expression()?;
            self.emitter.emit_line("));");
        }
        Ok(())
    }

    // "IF" comparison "THEN" nl {statement} "ENDIF"
    fn r#if(&mut self) -> Result<()> {
        trace!("STATEMENT-IF");
        self.next_token()?;
        self.emitter.emit("if(");
        self.comparison()?;
        self.expect(Kind::Word(Word::Then))?;
        self.nl()?;
        self.emitter.emit_line("){");
        self.block(Word::Endif)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    // "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"
    fn r#while(&mut self) -> Result<()> {
        trace!("STATEMENT-WHILE");
        self.next_token()?;
        self.emitter.emit("while(");
        self.comparison()?;
        self.expect(Kind::Word(Word::Repeat))?;
        self.nl()?;
        self.emitter.emit_line("){");
        self.block(Word::Endwhile)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    /// Zero or more statements, then the closing word.
    fn block(&mut self, closing: Word) -> Result<()> {
        while !self.check_token(Kind::Word(closing)) {
            match self.cur_token.kind() {
                Kind::Eof | Kind::Word(Word::Endif) | Kind::Word(Word::Endwhile) => {
                    return Err(self.expected(Kind::Word(closing)));
                }
                _ => {}
            }
            self.statement()?;
        }
        self.next_token()?;
        Ok(())
    }

    // "LABEL" ident
    fn r#label(&mut self) -> Result<()> {
        trace!("STATEMENT-LABEL");
        self.next_token()?;
        let label = self.name()?;
        if !self.labels_declared.insert(label.text().to_string()) {
            return Err(error!(DuplicateLabel, label.line(), ..label.column();
                "label {} already exists", label.text()));
        }
        // The empty statement keeps a label before `}` valid C.
        self.emitter.emit_line(&format!("{}:;", label.text()));
        Ok(())
    }

    // "GOTO" ident
    fn r#goto(&mut self) -> Result<()> {
        trace!("STATEMENT-GOTO");
        self.next_token()?;
        let label = self.name()?;
        self.emitter.emit_line(&format!("goto {};", label.text()));
        self.labels_gotoed.push(label);
        Ok(())
    }

    // "LET" ident "=" expression
    fn r#let(&mut self) -> Result<()> {
        trace!("STATEMENT-LET");
        self.next_token()?;
        let var = self.name()?;
        self.declare(&var);
        self.emitter.emit(&format!("{} = ", var.text()));
        self.expect(Kind::Operator(Operator::Equal))?;
        self.expression()?;
        self.emitter.emit_line(";");
        Ok(())
    }

    // "INPUT" ident
    fn r#input(&mut self) -> Result<()> {
        trace!("STATEMENT-INPUT");
        self.next_token()?;
        let var = self.name()?;
        self.declare(&var);
        let name = var.text();
        // Unparseable input zeroes the variable and discards the bad word.
        self.emitter
            .emit_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name));
        self.emitter.emit_line(&format!("{} = 0;", name));
        self.emitter.emit_line("scanf(\"%*s\");");
        self.emitter.emit_line("}");
        Ok(())
    }

    /// First LET or INPUT of a name declares it at the top of `main`.
    fn declare(&mut self, var: &Token) {
        if self.symbols.insert(var.text().to_string()) {
            self.emitter.header_line(&format!("float {};", var.text()));
        }
    }

    // comparison ::= expression (relop expression)+
    fn comparison(&mut self) -> Result<()> {
        trace!("COMPARISON");
        self.expression()?;
        if !self.cur_token.kind().is_comparison_operator() {
            return Err(error!(SyntaxError, self.cur_token.line(), ..self.cur_token.column();
                "expected comparison operator, found {}", self.cur_token));
        }
        while self.cur_token.kind().is_comparison_operator() {
            let op = self.next_token()?;
            self.emitter.emit(&format!(" {} ", op.text()));
            self.expression()?;
        }
        Ok(())
    }

    // expression ::= term {("-" | "+") term}
    fn expression(&mut self) -> Result<()> {
        trace!("EXPRESSION");
        self.term()?;
        while self.check_operator(&[Operator::Plus, Operator::Minus]) {
            let op = self.next_token()?;
            self.emitter.emit(&format!(" {} ", op.text()));
            self.term()?;
        }
        Ok(())
    }

    // term ::= unary {("/" | "*") unary}
    fn term(&mut self) -> Result<()> {
        trace!("TERM");
        self.unary()?;
        while self.check_operator(&[Operator::Multiply, Operator::Divide]) {
            let op = self.next_token()?;
            self.emitter.emit(&format!(" {} ", op.text()));
            self.unary()?;
        }
        Ok(())
    }

    // unary ::= ["+" | "-"] primary
    fn unary(&mut self) -> Result<()> {
        trace!("UNARY");
        if self.check_operator(&[Operator::Plus, Operator::Minus]) {
            let op = self.next_token()?;
            self.emitter.emit(op.text());
        }
        self.primary()
    }

    // primary ::= number | ident
    fn primary(&mut self) -> Result<()> {
        trace!("PRIMARY ({})", self.cur_token);
        match self.cur_token.kind() {
            Kind::Number => {
                let number = self.next_token()?;
                if number.text().contains('.') {
                    self.emitter.emit(number.text());
                } else {
                    self.emitter.emit(&format!("{}.0", number.text()));
                }
            }
            Kind::Ident => {
                if !self.symbols.contains(self.cur_token.text()) {
                    return Err(error!(UndeclaredVariable,
                        self.cur_token.line(), ..self.cur_token.column();
                        "{} is referenced before assignment", self.cur_token.text()));
                }
                let var = self.next_token()?;
                self.emitter.emit(var.text());
            }
            _ => {
                return Err(error!(SyntaxError, self.cur_token.line(), ..self.cur_token.column();
                    "unexpected token at {}", self.cur_token));
            }
        }
        Ok(())
    }

    // nl ::= '\n'+
    fn nl(&mut self) -> Result<()> {
        trace!("NEWLINE");
        self.expect(Kind::Newline)?;
        while self.check_token(Kind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }
}
