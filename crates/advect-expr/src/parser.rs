//! Recursive-descent parser.
//!
//! ```text
//! program  := '(' items ')' | items
//! items    := additive (',' additive)* ','?
//! additive := term (('+' | '-') term)*
//! term     := unary (('*' | '/' | '%') unary)*
//! unary    := ('-' | '+') unary | power
//! power    := primary ('**' unary)?
//! primary  := NUMBER | IDENT | IDENT '(' args ')' | '(' additive ')'
//! ```
//!
//! The tuple form is tried first when the program starts with `(`. Errors
//! inside the group are reported as found. If the group closes before the
//! last token the whole input is re-parsed as a bare item list, so
//! `(x + 1) * 2, y` still works.

use std::ops::Range;

use crate::ast::{BinaryOp, Expr, Func, UnaryOp, Var};
use crate::error::{ExprError, ExprErrorKind};
use crate::lexer::{tokenize, Spanned, Token};

/// Module prefixes accepted in front of names.
const PREFIXES: [&str; 3] = ["np.", "numpy.", "math."];

/// Parse `source` into its list of component expressions.
///
/// The number of components is not checked here.
pub fn parse(source: &str) -> Result<Vec<Expr>, ExprError> {
    let tokens = tokenize(source)?;
    Parser {
        tokens: &tokens,
        pos: 0,
        end: source.len(),
    }
    .program()
}

struct Parser<'t> {
    tokens: &'t [Spanned],
    pos: usize,
    end: usize,
}

impl Parser<'_> {
    // ── Cursor helpers ─────────────────────────────────────────

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn span(&self) -> Range<usize> {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.end..self.end,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn unexpected(&self, expected: &str) -> ExprError {
        match self.tokens.get(self.pos) {
            Some((token, span)) => ExprError::new(
                ExprErrorKind::UnexpectedToken,
                span.clone(),
                format!("expected {expected}, found {}", describe(token)),
            ),
            None => ExprError::new(
                ExprErrorKind::UnexpectedEof,
                self.end..self.end,
                format!("expected {expected}, found end of input"),
            ),
        }
    }

    fn expect(&mut self, token: &Token, expected: &str) -> Result<(), ExprError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    // ── Grammar ────────────────────────────────────────────────

    fn program(&mut self) -> Result<Vec<Expr>, ExprError> {
        if self.at_end() {
            return Err(ExprError::new(
                ExprErrorKind::Empty,
                0..self.end,
                "empty expression",
            ));
        }

        if self.peek() == Some(&Token::LParen) {
            let start = self.pos;
            self.pos += 1;
            // Errors inside the group are the same whichever way it is read.
            let items = self.items()?;
            if !self.eat(&Token::RParen) {
                return Err(self.unexpected("',' or ')'"));
            }
            if self.at_end() {
                return Ok(items);
            }
            self.pos = start;
        }

        let items = self.items()?;
        if !self.at_end() {
            return Err(self.unexpected("',' or end of input"));
        }
        Ok(items)
    }

    fn items(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut items = vec![self.additive()?];
        while self.eat(&Token::Comma) {
            if self.at_end() || self.peek() == Some(&Token::RParen) {
                break;
            }
            items.push(self.additive()?);
        }
        Ok(items)
    }

    fn additive(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.peek() {
            Some(Token::Minus) => UnaryOp::Neg,
            Some(Token::Plus) => UnaryOp::Pos,
            _ => return self.power(),
        };
        self.pos += 1;
        Ok(Expr::Unary(op, Box::new(self.unary()?)))
    }

    fn power(&mut self) -> Result<Expr, ExprError> {
        let base = self.primary()?;
        if self.eat(&Token::StarStar) {
            let exponent = self.unary()?;
            return Ok(Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        let span = self.span();
        match self.peek().cloned() {
            Some(Token::Number(n)) => {
                self.pos += 1;
                Ok(Expr::Number(n))
            }
            Some(Token::Ident(name)) => {
                self.pos += 1;
                if self.peek() == Some(&Token::LParen) {
                    self.call(&name, span)
                } else {
                    resolve_name(&name, span)
                }
            }
            Some(Token::LParen) => {
                self.pos += 1;
                let inner = self.additive()?;
                if self.peek() == Some(&Token::Comma) {
                    return Err(ExprError::new(
                        ExprErrorKind::NestedTuple,
                        self.span(),
                        "a tuple is only allowed as the whole expression",
                    ));
                }
                self.expect(&Token::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("a number, name, or '('")),
        }
    }

    fn call(&mut self, name: &str, name_span: Range<usize>) -> Result<Expr, ExprError> {
        let canonical = strip_prefix(name);
        let func = Func::from_name(canonical).ok_or_else(|| {
            ExprError::new(
                ExprErrorKind::UnknownFunction,
                name_span.clone(),
                format!("unknown function '{name}'"),
            )
        })?;

        self.expect(&Token::LParen, "'('")?;
        let mut args = Vec::new();
        if !self.eat(&Token::RParen) {
            loop {
                args.push(self.additive()?);
                if self.eat(&Token::Comma) {
                    continue;
                }
                self.expect(&Token::RParen, "',' or ')'")?;
                break;
            }
        }

        if args.len() != func.arity() {
            let call_span = name_span.start..self.tokens[self.pos - 1].1.end;
            return Err(ExprError::new(
                ExprErrorKind::WrongArgCount,
                call_span,
                format!(
                    "{}() takes {} argument{}, got {}",
                    func.name(),
                    func.arity(),
                    if func.arity() == 1 { "" } else { "s" },
                    args.len()
                ),
            ));
        }
        Ok(Expr::Call(func, args))
    }
}

fn strip_prefix(name: &str) -> &str {
    PREFIXES
        .iter()
        .find_map(|p| name.strip_prefix(p))
        .unwrap_or(name)
}

fn resolve_name(name: &str, span: Range<usize>) -> Result<Expr, ExprError> {
    match strip_prefix(name) {
        "x" => Ok(Expr::Var(Var::X)),
        "y" => Ok(Expr::Var(Var::Y)),
        "pi" => Ok(Expr::Number(std::f64::consts::PI)),
        "e" => Ok(Expr::Number(std::f64::consts::E)),
        "tau" => Ok(Expr::Number(std::f64::consts::TAU)),
        _ => Err(ExprError::new(
            ExprErrorKind::UnknownName,
            span,
            format!("unknown name '{name}'"),
        )),
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {n}"),
        Token::Ident(name) => format!("name '{name}'"),
        Token::Plus => "'+'".into(),
        Token::Minus => "'-'".into(),
        Token::Star => "'*'".into(),
        Token::StarStar => "'**'".into(),
        Token::Slash => "'/'".into(),
        Token::Percent => "'%'".into(),
        Token::LParen => "'('".into(),
        Token::RParen => "')'".into(),
        Token::Comma => "','".into(),
    }
}
