//! A small, safe expression language over the sampling coordinates.
//!
//! The `advect` CLI accepts a field as text, e.g. `"-(y - 0.5), x - 0.5"`.
//! This crate lexes and parses that text into an [`Expression`], which
//! implements [`SampleFunction`](advect_gen::SampleFunction) and is
//! evaluated natively; nothing is ever executed dynamically.
//!
//! # Language
//!
//! - Components are separated by commas, optionally wrapped in one pair
//!   of parentheses: `x, y` and `(x, y, 0)` are equivalent forms.
//! - Variables `x`, `y`; constants `pi`, `e`, `tau`.
//! - Operators with Python precedence: `+ -` < `* / %` < unary `-`/`+`
//!   < `**` (right associative). `%` is floored modulo.
//! - Functions: see [`Func`]. A `np.`, `numpy.` or `math.` prefix is
//!   accepted and ignored, so `np.sin(x)` works.
//!
//! ```
//! use advect_expr::Expression;
//! use advect_gen::SampleFunction;
//!
//! let expr: Expression = "(np.sin(pi * x), y ** 2)".parse().unwrap();
//! assert_eq!(expr.arity(), 2);
//! let s = expr.sample(0.5, 3.0);
//! assert_eq!(s.as_slice(), &[1.0, 9.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ast;
pub mod error;
pub mod expression;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr, Func, UnaryOp, Var};
pub use error::{ExprError, ExprErrorKind};
pub use expression::Expression;
pub use parser::parse;
