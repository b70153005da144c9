//! Denavit-Hartenberg frame transforms.
//!
//! A [`Transform`] maps frame n-1 to frame n using the four DH parameters
//! theta, d, alpha, a (in that order). Each parameter is either fixed or a
//! named joint variable; the symbolic matrix is built and simplified once at
//! construction, and [`Transform::callable`] turns it into an [`Evaluator`]
//! that takes one value per variable.

mod elementary;
mod evaluator;

use log::debug;
use nalgebra::Matrix4;

use crate::error::Result;
use crate::expr::{cos, mul, neg, one, sin, zero, Expr};
use crate::matrix::SymbolicMatrix;
use crate::parameter::Parameter;
use crate::simplify::simplify_fully;

pub use elementary::{rot_x, rot_z, trans_x, trans_z};
pub use evaluator::Evaluator;

#[derive(Clone, Debug)]
pub struct Transform {
    parameters: [Parameter; 4],
    arguments: Vec<String>,
    matrix: SymbolicMatrix,
}

struct Trig {
    ct: Expr,
    st: Expr,
    ca: Expr,
    sa: Expr,
}

impl Trig {
    fn new(theta: &Expr, alpha: &Expr) -> Self {
        Self {
            ct: simplify_fully(cos(theta.clone())),
            st: simplify_fully(sin(theta.clone())),
            ca: simplify_fully(cos(alpha.clone())),
            sa: simplify_fully(sin(alpha.clone())),
        }
    }
}

impl Transform {
    /// Construct the transform from frame n-1 to frame n.
    pub fn new(
        theta: impl Into<Parameter>,
        d: impl Into<Parameter>,
        alpha: impl Into<Parameter>,
        a: impl Into<Parameter>,
    ) -> Self {
        let parameters = [theta.into(), d.into(), alpha.into(), a.into()];
        let [theta, d, alpha, a] = parameters.each_ref().map(Parameter::to_expr);
        let Trig { ct, st, ca, sa } = Trig::new(&theta, &alpha);

        let matrix = SymbolicMatrix::from_rows([
            [
                ct.clone(),
                neg(mul(st.clone(), ca.clone())),
                mul(st.clone(), sa.clone()),
                mul(a.clone(), ct.clone()),
            ],
            [st.clone(), mul(ct.clone(), ca.clone()), neg(mul(ct, sa.clone())), mul(a, st)],
            [zero(), sa, ca, d],
            [zero(), zero(), zero(), one()],
        ])
        .simplify();

        let arguments: Vec<String> = parameters
            .iter()
            .filter_map(Parameter::as_symbol)
            .map(str::to_string)
            .collect();

        debug!(
            "built DH transform theta={} d={} alpha={} a={} with {} argument(s)",
            parameters[0],
            parameters[1],
            parameters[2],
            parameters[3],
            arguments.len()
        );

        Self {
            parameters,
            arguments,
            matrix,
        }
    }

    /// The parameters theta, d, alpha and a.
    pub fn parameters(&self) -> &[Parameter; 4] {
        &self.parameters
    }

    /// Which of theta, d, alpha, a are fixed values rather than arguments.
    pub fn is_fixed_at(&self) -> [bool; 4] {
        self.parameters.each_ref().map(|p| !p.is_symbol())
    }

    /// Names of the variable parameters, in theta/d/alpha/a order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// True if no parameter is a variable.
    pub fn is_fixed(&self) -> bool {
        !self.matrix.is_symbolic()
    }

    /// Transformation matrix from frame n-1 to frame n.
    pub fn matrix(&self) -> &SymbolicMatrix {
        &self.matrix
    }

    /// Transformation matrix from frame n to frame n-1.
    ///
    /// Fixed parameters enter the inverse as constants, so partially
    /// parametric transforms invert just like fully symbolic ones.
    pub fn inverse(&self) -> SymbolicMatrix {
        let [theta, d, alpha, a] = self.parameters.each_ref().map(Parameter::to_expr);
        let Trig { ct, st, ca, sa } = Trig::new(&theta, &alpha);

        SymbolicMatrix::from_rows([
            [ct.clone(), st.clone(), zero(), neg(a)],
            [
                neg(mul(st.clone(), ca.clone())),
                mul(ct.clone(), ca.clone()),
                sa.clone(),
                neg(mul(d.clone(), sa.clone())),
            ],
            [mul(sa.clone(), st), neg(mul(ct, sa)), ca.clone(), neg(mul(d, ca))],
            [zero(), zero(), zero(), one()],
        ])
        .simplify()
    }

    /// Evaluator producing the numeric transform from argument values.
    pub fn callable(&self) -> Evaluator {
        self.evaluator_for(self.matrix.clone())
    }

    /// Evaluator producing the numeric inverse from argument values.
    pub fn inverse_callable(&self) -> Evaluator {
        self.evaluator_for(self.inverse())
    }

    /// Apply argument values and return the numeric transform.
    pub fn apply(&self, args: &[f64]) -> Result<Matrix4<f64>> {
        self.callable().evaluate(args)
    }

    /// Apply argument values and return the numeric inverse transform.
    pub fn apply_inverse(&self, args: &[f64]) -> Result<Matrix4<f64>> {
        self.inverse_callable().evaluate(args)
    }

    fn evaluator_for(&self, matrix: SymbolicMatrix) -> Evaluator {
        let evaluator = match matrix.to_constant() {
            Some(constant) => Evaluator::Fixed(constant),
            None => Evaluator::Parametric {
                matrix,
                arguments: self.arguments.clone(),
            },
        };
        debug!("created evaluator of arity {}", evaluator.arity());
        evaluator
    }
}
