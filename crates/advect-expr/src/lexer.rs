//! Tokenization using logos.

use std::ops::Range;

use logos::Logos;

use crate::error::{ExprError, ExprErrorKind};

/// Expression token.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literal (e.g. `2`, `0.5`, `.5`, `1.`, `3e-2`).
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// Identifier, possibly dotted (`x`, `sin`, `np.sin`).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*", |lex| lex.slice().to_string())]
    Ident(String),

    /// Operator `+`
    #[token("+")]
    Plus,
    /// Operator `-`
    #[token("-")]
    Minus,
    /// Operator `*`
    #[token("*")]
    Star,
    /// Operator `**`
    #[token("**")]
    StarStar,
    /// Operator `/`
    #[token("/")]
    Slash,
    /// Operator `%`
    #[token("%")]
    Percent,
    /// Delimiter `(`
    #[token("(")]
    LParen,
    /// Delimiter `)`
    #[token(")")]
    RParen,
    /// Separator `,`
    #[token(",")]
    Comma,
}

/// A token with its byte range in the source.
pub type Spanned = (Token, Range<usize>);

/// Tokenize `source`, failing on the first unrecognized input.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ExprError> {
    let mut out = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => out.push((token, span)),
            Err(()) => {
                let text = &source[span.clone()];
                return Err(ExprError::new(
                    ExprErrorKind::InvalidToken,
                    span,
                    format!("invalid token '{text}'"),
                ));
            }
        }
    }
    Ok(out)
}
