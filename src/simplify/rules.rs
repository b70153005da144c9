use crate::expr::{zero, Expr};

pub const DEFAULT_SIMPLIFY_ITERATIONS: usize = 64;

/// Single bottom-up simplification pass.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Add(a, b) => simplify_add(simplify(*a), simplify(*b)),
        Expr::Mul(a, b) => simplify_mul(simplify(*a), simplify(*b)),
        Expr::Neg(a) => simplify_neg(simplify(*a)),
        Expr::Sin(a) => simplify_sin(simplify(*a)),
        Expr::Cos(a) => simplify_cos(simplify(*a)),
        Expr::Constant(c) => Expr::constant(c),
        e => e,
    }
}

/// Apply simplification passes until the expression stops changing or we hit the iteration cap.
pub fn simplify_fully(expr: Expr) -> Expr {
    simplify_with_limit(expr, DEFAULT_SIMPLIFY_ITERATIONS)
}

/// Apply simplification passes up to `max_iters`, returning the last value if convergence is not reached.
pub fn simplify_with_limit(expr: Expr, max_iters: usize) -> Expr {
    let mut current = expr;
    for _ in 0..max_iters {
        let next = simplify(current.clone());
        if next.is_identical(&current) {
            return current;
        }
        current = next;
    }
    current
}

fn simplify_sin(x: Expr) -> Expr {
    match x {
        Expr::Constant(c) => Expr::constant(c.sin()),
        Expr::Neg(inner) => simplify_neg(Expr::Sin(inner)),
        x => Expr::Sin(x.boxed()),
    }
}

fn simplify_cos(x: Expr) -> Expr {
    match x {
        Expr::Constant(c) => Expr::constant(c.cos()),
        Expr::Neg(inner) => Expr::Cos(inner),
        x => Expr::Cos(x.boxed()),
    }
}

fn simplify_neg(x: Expr) -> Expr {
    match x {
        Expr::Constant(c) => Expr::constant(-c),
        Expr::Neg(inner) => *inner,
        Expr::Mul(_, _) => {
            let (coeff, factors) = split_product(&x);
            term_from(-coeff, factors)
        }
        x => Expr::Neg(x.boxed()),
    }
}

fn simplify_add(x: Expr, y: Expr) -> Expr {
    let mut constant = 0.0;
    let mut terms = Vec::new();
    for term in flatten_sum(&x).into_iter().chain(flatten_sum(&y)) {
        match term {
            Expr::Constant(c) => constant += c,
            t => terms.push(t),
        }
    }

    if constant != 0.0 {
        terms.push(Expr::constant(constant));
    }

    let mut iter = terms.into_iter();
    match iter.next() {
        None => zero(),
        Some(first) => iter.fold(first, |acc, item| Expr::Add(acc.boxed(), item.boxed())),
    }
}

fn simplify_mul(x: Expr, y: Expr) -> Expr {
    let (cx, mut fx) = split_product(&x);
    let (cy, fy) = split_product(&y);
    fx.extend(fy);
    term_from(cx * cy, fx)
}

fn flatten_sum(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Add(a, b) => {
            let mut out = flatten_sum(a);
            out.extend(flatten_sum(b));
            out
        }
        Expr::Neg(a) => flatten_sum(a).into_iter().map(simplify_neg).collect(),
        other => vec![other.clone()],
    }
}

/// Splits a product into its numeric coefficient and its symbolic factors,
/// absorbing negations into the coefficient.
fn split_product(expr: &Expr) -> (f64, Vec<Expr>) {
    match expr {
        Expr::Constant(c) => (*c, Vec::new()),
        Expr::Neg(e) => {
            let (c, f) = split_product(e);
            (-c, f)
        }
        Expr::Mul(a, b) => {
            let (ca, mut fa) = split_product(a);
            let (cb, fb) = split_product(b);
            fa.extend(fb);
            (ca * cb, fa)
        }
        other => (1.0, vec![other.clone()]),
    }
}

fn term_from(coeff: f64, factors: Vec<Expr>) -> Expr {
    let coeff = Expr::constant(coeff);
    let mut iter = factors.into_iter();
    let Some(first) = iter.next() else {
        return coeff;
    };
    // A NaN coefficient is never zero and stays as an explicit factor.
    if coeff.is_zero() {
        return zero();
    }
    let base = iter.fold(first, |acc, item| Expr::Mul(acc.boxed(), item.boxed()));
    if coeff.is_one() {
        base
    } else if coeff == Expr::Constant(-1.0) {
        Expr::Neg(base.boxed())
    } else {
        Expr::Mul(coeff.boxed(), base.boxed())
    }
}
