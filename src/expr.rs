//! Expression tree definitions and helpers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::DhError;

/// A symbolic scalar made of constants, named variables, sums, products,
/// negation, and the two trigonometric functions a DH transform needs.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Variable(String),
    Constant(f64),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Builds a constant, mapping `-0.0` to `0.0` so printed matrices never
    /// show a signed zero.
    pub fn constant(value: f64) -> Self {
        Expr::Constant(if value == 0.0 { 0.0 } else { value })
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Constant(c) if *c == 0.0)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Constant(c) if *c == 1.0)
    }

    pub fn as_constant(&self) -> Option<f64> {
        if let Expr::Constant(c) = self {
            Some(*c)
        } else {
            None
        }
    }

    /// Structural equality that compares constants by bit pattern, so a tree
    /// holding NaN is identical to itself.
    pub fn is_identical(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Constant(a), Expr::Constant(b)) => a.to_bits() == b.to_bits(),
            (Expr::Add(a1, b1), Expr::Add(a2, b2)) | (Expr::Mul(a1, b1), Expr::Mul(a2, b2)) => {
                a1.is_identical(a2) && b1.is_identical(b2)
            }
            (Expr::Neg(a), Expr::Neg(b))
            | (Expr::Sin(a), Expr::Sin(b))
            | (Expr::Cos(a), Expr::Cos(b)) => a.is_identical(b),
            _ => false,
        }
    }

    /// Names of every variable appearing in the expression.
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Variable(name) => {
                out.insert(name.clone());
            }
            Expr::Constant(_) => {}
            Expr::Add(a, b) | Expr::Mul(a, b) => {
                a.collect_variables(out);
                b.collect_variables(out);
            }
            Expr::Neg(a) | Expr::Sin(a) | Expr::Cos(a) => a.collect_variables(out),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        match self {
            Expr::Variable(_) => true,
            Expr::Constant(_) => false,
            Expr::Add(a, b) | Expr::Mul(a, b) => a.is_symbolic() || b.is_symbolic(),
            Expr::Neg(a) | Expr::Sin(a) | Expr::Cos(a) => a.is_symbolic(),
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

impl FromStr for Expr {
    type Err = DhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_expr(s)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

pub fn zero() -> Expr {
    Expr::Constant(0.0)
}

pub fn one() -> Expr {
    Expr::Constant(1.0)
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(a.boxed(), b.boxed())
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(a.boxed(), b.boxed())
}

pub fn neg(a: Expr) -> Expr {
    Expr::Neg(a.boxed())
}

pub fn sin(a: Expr) -> Expr {
    Expr::Sin(a.boxed())
}

pub fn cos(a: Expr) -> Expr {
    Expr::Cos(a.boxed())
}
