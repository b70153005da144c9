use log::trace;
use nalgebra::Matrix4;

use crate::error::{DhError, Result};
use crate::eval::Bindings;
use crate::matrix::SymbolicMatrix;

/// Numeric entry point for a transform matrix.
///
/// A fixed transform is evaluated once up front; a parametric one keeps its
/// symbolic matrix and the ordered names of the values it expects.
#[derive(Clone, Debug)]
pub enum Evaluator {
    Fixed(Matrix4<f64>),
    Parametric {
        matrix: SymbolicMatrix,
        arguments: Vec<String>,
    },
}

impl Evaluator {
    /// Number of values `evaluate` expects.
    pub fn arity(&self) -> usize {
        match self {
            Evaluator::Fixed(_) => 0,
            Evaluator::Parametric { arguments, .. } => arguments.len(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Evaluator::Fixed(_))
    }

    /// Bind `args` positionally to the argument list and return the numeric matrix.
    pub fn evaluate(&self, args: &[f64]) -> Result<Matrix4<f64>> {
        if args.len() != self.arity() {
            return Err(DhError::ArgumentCountMismatch {
                expected: self.arity(),
                found: args.len(),
            });
        }

        match self {
            Evaluator::Fixed(matrix) => Ok(*matrix),
            Evaluator::Parametric { matrix, arguments } => {
                let bindings = bind(arguments, args)?;
                trace!("evaluating transform with {bindings:?}");
                matrix.evaluate(&bindings)
            }
        }
    }
}

fn bind(names: &[String], values: &[f64]) -> Result<Bindings> {
    let mut bindings = Bindings::with_capacity(names.len());
    for (name, &value) in names.iter().zip(values) {
        if let Some(&first) = bindings.get(name) {
            // 0.0 and -0.0 agree, and a repeated NaN is not a conflict.
            if first != value && !(first.is_nan() && value.is_nan()) {
                return Err(DhError::ConflictingArgument {
                    name: name.clone(),
                    first,
                    second: value,
                });
            }
        }
        bindings.insert(name.clone(), value);
    }
    Ok(bindings)
}
