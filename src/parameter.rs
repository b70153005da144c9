//! Denavit-Hartenberg parameter values.

use std::fmt;
use std::str::FromStr;

use crate::error::DhError;
use crate::expr::Expr;
use crate::parser::parse_parameter;

/// One of the four DH parameters: either a fixed number or a named joint variable.
#[derive(Clone, PartialEq, Debug)]
pub enum Parameter {
    Fixed(f64),
    Symbol(String),
}

impl Parameter {
    pub fn symbol(name: impl Into<String>) -> Self {
        Parameter::Symbol(name.into())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Parameter::Symbol(_))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Parameter::Symbol(name) => Some(name),
            Parameter::Fixed(_) => None,
        }
    }

    pub fn to_expr(&self) -> Expr {
        match self {
            Parameter::Fixed(value) => Expr::constant(*value),
            Parameter::Symbol(name) => Expr::var(name.clone()),
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Fixed(value)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::Fixed(value.into())
    }
}

impl From<&str> for Parameter {
    fn from(name: &str) -> Self {
        Parameter::Symbol(name.to_string())
    }
}

impl From<String> for Parameter {
    fn from(name: String) -> Self {
        Parameter::Symbol(name)
    }
}

impl FromStr for Parameter {
    type Err = DhError;

    /// Parses `"1.5"`, `"-2"` as fixed values and `"theta_1"` as a symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_parameter(s)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Fixed(value) => write!(f, "{value}"),
            Parameter::Symbol(name) => f.write_str(name),
        }
    }
}
