//! Constant folding, trigonometric simplification, and substitution.

mod rules;
mod substitute;

pub use rules::{simplify, simplify_fully, simplify_with_limit, DEFAULT_SIMPLIFY_ITERATIONS};
pub use substitute::substitute;
