use crate::expr::Expr;

pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(c) if *c < 0.0 => bracket(ctx, 3, format!("{c}")),
            Expr::Constant(c) => format!("{c}"),

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{}*{}", pp(2, &a_inner), pp(2, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Neg(a) => {
                let (is_neg, inner) = split_neg(a);
                if is_neg {
                    pp(ctx, &inner)
                } else {
                    bracket(ctx, 2, format!("-{}", pp(2, &inner)))
                }
            }

            Expr::Sin(a) => format!("sin({})", pp(0, a)),
            Expr::Cos(a) => format!("cos({})", pp(0, a)),
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(c) if *c < 0.0 => (true, Expr::Constant(-c)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}
