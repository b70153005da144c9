use crate::format::expr::pretty;
use crate::matrix::SymbolicMatrix;

/// Render a symbolic matrix as a block of right-aligned columns.
pub fn pretty_matrix(matrix: &SymbolicMatrix) -> String {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(pretty).collect())
        .collect();

    let widths: Vec<usize> = (0..4)
        .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let body: Vec<String> = cells
        .iter()
        .map(|row| {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect();
            format!("[{}]", padded.join(", "))
        })
        .collect();

    format!("Matrix([\n{}])", body.join(",\n"))
}
