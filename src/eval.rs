//! Numeric evaluation of expression trees.

use std::collections::HashMap;

use crate::error::{DhError, Result};
use crate::expr::Expr;

/// Variable name to value mapping used during evaluation.
pub type Bindings = HashMap<String, f64>;

/// Evaluate `expr` to a double, looking variables up in `bindings`.
///
/// Non-finite constants and bindings propagate through the arithmetic as
/// IEEE-754 dictates; only a missing binding is an error.
pub fn eval(expr: &Expr, bindings: &Bindings) -> Result<f64> {
    Ok(match expr {
        Expr::Constant(c) => *c,
        Expr::Variable(name) => *bindings
            .get(name)
            .ok_or_else(|| DhError::UnboundVariable(name.clone()))?,
        Expr::Add(a, b) => eval(a, bindings)? + eval(b, bindings)?,
        Expr::Mul(a, b) => eval(a, bindings)? * eval(b, bindings)?,
        Expr::Neg(a) => -eval(a, bindings)?,
        Expr::Sin(a) => eval(a, bindings)?.sin(),
        Expr::Cos(a) => eval(a, bindings)?.cos(),
    })
}
