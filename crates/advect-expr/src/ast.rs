//! Expression tree and evaluation.
//!
//! Names are resolved during parsing, so a tree that exists is always
//! evaluable: variables are [`Var`], constants are folded into
//! [`Expr::Number`], and calls hold a [`Func`] whose argument count has
//! already been checked.

use std::fmt;

/// A coordinate variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Var {
    /// First coordinate (follows rows).
    X,
    /// Second coordinate (follows columns).
    Y,
}

/// Prefix operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-a`
    Neg,
    /// `+a`
    Pos,
}

/// Infix operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`, floored: the result has the sign of `b`.
    Rem,
    /// `a ** b`
    Pow,
}

impl BinaryOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Rem => {
                let r = a % b;
                if r == 0.0 {
                    0.0f64.copysign(b)
                } else if (r < 0.0) != (b < 0.0) {
                    r + b
                } else {
                    r
                }
            }
            Self::Pow => a.powf(b),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "**",
        }
    }
}

/// Built-in function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    /// `sin(a)`
    Sin,
    /// `cos(a)`
    Cos,
    /// `tan(a)`
    Tan,
    /// `asin(a)`, also `arcsin`
    Asin,
    /// `acos(a)`, also `arccos`
    Acos,
    /// `atan(a)`, also `arctan`
    Atan,
    /// `sinh(a)`
    Sinh,
    /// `cosh(a)`
    Cosh,
    /// `tanh(a)`
    Tanh,
    /// `exp(a)`
    Exp,
    /// `log(a)`, natural logarithm
    Log,
    /// `log10(a)`
    Log10,
    /// `sqrt(a)`
    Sqrt,
    /// `abs(a)`, also `fabs`
    Abs,
    /// `floor(a)`
    Floor,
    /// `ceil(a)`
    Ceil,
    /// `atan2(a, b)`, also `arctan2`
    Atan2,
    /// `pow(a, b)`, also `power`
    Pow,
    /// `hypot(a, b)`
    Hypot,
    /// `min(a, b)`, also `minimum`
    Min,
    /// `max(a, b)`, also `maximum`
    Max,
}

impl Func {
    /// Look up a function by name, accepting the numpy spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" | "arcsin" => Self::Asin,
            "acos" | "arccos" => Self::Acos,
            "atan" | "arctan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "sqrt" => Self::Sqrt,
            "abs" | "fabs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "atan2" | "arctan2" => Self::Atan2,
            "pow" | "power" => Self::Pow,
            "hypot" => Self::Hypot,
            "min" | "minimum" => Self::Min,
            "max" | "maximum" => Self::Max,
            _ => return None,
        })
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Atan2 => "atan2",
            Self::Pow => "pow",
            Self::Hypot => "hypot",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Atan2 | Self::Pow | Self::Hypot | Self::Min | Self::Max => 2,
            _ => 1,
        }
    }

    /// Apply to already-evaluated arguments. `args.len()` equals
    /// [`arity`](Self::arity).
    fn apply(self, args: &[f64]) -> f64 {
        let a = args[0];
        match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => a.asin(),
            Self::Acos => a.acos(),
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Exp => a.exp(),
            Self::Log => a.ln(),
            Self::Log10 => a.log10(),
            Self::Sqrt => a.sqrt(),
            Self::Abs => a.abs(),
            Self::Floor => a.floor(),
            Self::Ceil => a.ceil(),
            Self::Atan2 => a.atan2(args[1]),
            Self::Pow => a.powf(args[1]),
            Self::Hypot => a.hypot(args[1]),
            // NaN propagates, matching numpy's minimum/maximum.
            Self::Min => {
                if a.is_nan() || args[1].is_nan() {
                    f64::NAN
                } else {
                    a.min(args[1])
                }
            }
            Self::Max => {
                if a.is_nan() || args[1].is_nan() {
                    f64::NAN
                } else {
                    a.max(args[1])
                }
            }
        }
    }
}

/// Expression tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal or folded constant.
    Number(f64),
    /// Coordinate variable.
    Var(Var),
    /// Prefix operation.
    Unary(UnaryOp, Box<Expr>),
    /// Infix operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Function call.
    Call(Func, Vec<Expr>),
}

impl Expr {
    /// Evaluate at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Var(Var::X) => x,
            Self::Var(Var::Y) => y,
            Self::Unary(UnaryOp::Neg, a) => -a.eval(x, y),
            Self::Unary(UnaryOp::Pos, a) => a.eval(x, y),
            Self::Binary(op, a, b) => op.apply(a.eval(x, y), b.eval(x, y)),
            Self::Call(func, args) => {
                let values: smallvec::SmallVec<[f64; 2]> =
                    args.iter().map(|a| a.eval(x, y)).collect();
                func.apply(&values)
            }
        }
    }
}

/// Fully parenthesized rendering, for debugging and round-trip tests.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Var(Var::X) => f.write_str("x"),
            Self::Var(Var::Y) => f.write_str("y"),
            Self::Unary(UnaryOp::Neg, a) => write!(f, "(-{a})"),
            Self::Unary(UnaryOp::Pos, a) => write!(f, "(+{a})"),
            Self::Binary(op, a, b) => write!(f, "({a} {} {b})", op.symbol()),
            Self::Call(func, args) => {
                write!(f, "{}(", func.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
