//! Parse error types.

use std::fmt;
use std::ops::Range;

/// Category of expression error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprErrorKind {
    /// The input contains a character sequence that is not a token.
    InvalidToken,
    /// A token appeared where the grammar does not allow it.
    UnexpectedToken,
    /// The input ended in the middle of an expression.
    UnexpectedEof,
    /// An identifier is neither a variable nor a constant.
    UnknownName,
    /// A call names a function that does not exist.
    UnknownFunction,
    /// A function was called with the wrong number of arguments.
    WrongArgCount,
    /// A parenthesized tuple appears inside a larger expression.
    NestedTuple,
    /// The input has no tokens.
    Empty,
}

/// An error with the byte range of the source it refers to.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprError {
    /// Kind of error.
    pub kind: ExprErrorKind,
    /// Byte range in the source text.
    pub span: Range<usize>,
    /// Human-readable message.
    pub message: String,
}

impl ExprError {
    pub(crate) fn new(kind: ExprErrorKind, span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Format the error with the source line and a caret marker under the
    /// offending span.
    ///
    /// ```text
    /// unknown name 'z'
    ///   x, z
    ///      ^
    /// ```
    pub fn with_source(&self, source: &str) -> String {
        let start = self.span.start.min(source.len());
        let end = self.span.end.clamp(start, source.len());
        let chars = |range: Range<usize>| source.get(range).map_or(0, |s| s.chars().count());
        let pad = chars(0..start);
        let width = chars(start..end).max(1);
        format!(
            "{}\n  {}\n  {}{}",
            self.message,
            source,
            " ".repeat(pad),
            "^".repeat(width)
        )
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_span() {
        let e = ExprError::new(ExprErrorKind::UnknownName, 3..4, "unknown name 'z'");
        assert_eq!(e.to_string(), "unknown name 'z' at 3..4");
    }

    #[test]
    fn caret_points_at_span() {
        let e = ExprError::new(ExprErrorKind::UnknownName, 3..4, "unknown name 'z'");
        assert_eq!(e.with_source("x, z"), "unknown name 'z'\n  x, z\n     ^");
    }

    #[test]
    fn eof_caret_sits_past_the_end() {
        let e = ExprError::new(ExprErrorKind::UnexpectedEof, 2..2, "unexpected end of input");
        assert_eq!(e.with_source("x+"), "unexpected end of input\n  x+\n    ^");
    }

    #[test]
    fn caret_width_counts_characters() {
        // 'é' is two bytes.
        let e = ExprError::new(ExprErrorKind::InvalidToken, 3..5, "unexpected character");
        assert_eq!(e.with_source("x, é"), "unexpected character\n  x, é\n     ^");
        let e = ExprError::new(ExprErrorKind::UnknownName, 0..3, "unknown name 'é'");
        assert_eq!(e.with_source("éy"), "unknown name 'é'\n  éy\n  ^^");
    }
}
