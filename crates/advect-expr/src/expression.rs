//! [`Expression`]: a parsed program usable as a sample function.

use std::fmt;
use std::str::FromStr;

use advect_gen::{Sample, SampleFunction};

use crate::ast::Expr;
use crate::error::ExprError;
use crate::parser::parse;

/// A parsed expression program: one [`Expr`] per vector component.
///
/// Parsing accepts any number of components. Feeding a program with a
/// count other than 2 or 3 to [`generate`](advect_gen::generate) fails
/// with an arity error at the first sample; [`arity`](Self::arity) lets
/// callers check up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    components: Vec<Expr>,
}

impl Expression {
    /// Parse `source`.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        Ok(Self {
            source: source.to_string(),
            components: parse(source)?,
        })
    }

    /// Number of components each evaluation yields.
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    /// The parsed component trees.
    pub fn components(&self) -> &[Expr] {
        &self.components
    }

    /// The text this expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl SampleFunction for Expression {
    fn sample(&self, x: f64, y: f64) -> Sample {
        self.components.iter().map(|c| c.eval(x, y)).collect()
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
