//! Formatting helpers for rendering expressions and matrices.

pub mod expr;
pub mod matrix;

pub use expr::pretty;
pub use matrix::pretty_matrix;
