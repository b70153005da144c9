use crate::expr::Expr;

/// Substitute variable `var` with `replacement` throughout `expr`.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Expr {
    match expr {
        Expr::Variable(name) if name == var => replacement.clone(),
        Expr::Add(a, b) => Expr::Add(
            substitute(a, var, replacement).boxed(),
            substitute(b, var, replacement).boxed(),
        ),
        Expr::Mul(a, b) => Expr::Mul(
            substitute(a, var, replacement).boxed(),
            substitute(b, var, replacement).boxed(),
        ),
        Expr::Neg(a) => Expr::Neg(substitute(a, var, replacement).boxed()),
        Expr::Sin(a) => Expr::Sin(substitute(a, var, replacement).boxed()),
        Expr::Cos(a) => Expr::Cos(substitute(a, var, replacement).boxed()),
        _ => expr.clone(),
    }
}
