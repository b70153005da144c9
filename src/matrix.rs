//! Fixed-size 4x4 matrix of symbolic entries.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

use nalgebra::Matrix4;

use crate::error::Result;
use crate::eval::{eval, Bindings};
use crate::expr::{one, zero, Expr};
use crate::simplify::{simplify_fully, substitute};

/// A homogeneous transform whose entries are expressions.
#[derive(Clone, PartialEq, Debug)]
pub struct SymbolicMatrix {
    rows: [[Expr; 4]; 4],
}

impl SymbolicMatrix {
    pub fn from_rows(rows: [[Expr; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| if r == c { one() } else { zero() })
        }))
    }

    pub fn rows(&self) -> &[[Expr; 4]; 4] {
        &self.rows
    }

    pub fn free_variables(&self) -> BTreeSet<String> {
        self.entries().flat_map(Expr::free_variables).collect()
    }

    /// True when any entry still depends on a variable.
    pub fn is_symbolic(&self) -> bool {
        self.entries().any(Expr::is_symbolic)
    }

    pub fn simplify(&self) -> Self {
        self.map(|entry| simplify_fully(entry.clone()))
    }

    /// Replace `var` with `replacement` in every entry and re-simplify.
    pub fn substitute(&self, var: &str, replacement: &Expr) -> Self {
        self.map(|entry| simplify_fully(substitute(entry, var, replacement)))
    }

    /// Evaluate every entry to a double under `bindings`.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<Matrix4<f64>> {
        let mut out = Matrix4::zeros();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, entry) in row.iter().enumerate() {
                out[(r, c)] = eval(entry, bindings)?;
            }
        }
        Ok(out)
    }

    /// The numeric matrix, if every entry has folded to a constant.
    pub fn to_constant(&self) -> Option<Matrix4<f64>> {
        let mut out = Matrix4::zeros();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, entry) in row.iter().enumerate() {
                out[(r, c)] = entry.as_constant()?;
            }
        }
        Some(out)
    }

    fn entries(&self) -> impl Iterator<Item = &Expr> {
        self.rows.iter().flatten()
    }

    fn map(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| f(&self.rows[r][c]))
        }))
    }
}

impl Index<(usize, usize)> for SymbolicMatrix {
    type Output = Expr;

    fn index(&self, (row, col): (usize, usize)) -> &Expr {
        &self.rows[row][col]
    }
}

impl fmt::Display for SymbolicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty_matrix(self))
    }
}
