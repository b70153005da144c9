//! Denavit-Hartenberg frame transforms with symbolic joint variables.
//!
//! Parameters may be fixed numbers or named variables. Transforms keep a
//! simplified symbolic matrix and evaluate it to `nalgebra::Matrix4<f64>`.

pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod matrix;
pub mod parameter;
pub mod parser;
pub mod prelude;
pub mod simplify;
pub mod transform;

pub use error::{DhError, Result};
pub use eval::{eval, Bindings};
pub use expr::{add, cos, mul, neg, one, sin, zero, Expr};
pub use format::{pretty, pretty_matrix};
pub use matrix::SymbolicMatrix;
pub use parameter::Parameter;
pub use parser::{parse_expr, parse_parameter};
pub use simplify::{simplify, simplify_fully, simplify_with_limit, substitute};
pub use transform::{rot_x, rot_z, trans_x, trans_z, Evaluator, Transform};
