use dhframe::expr::{add, cos, mul, neg, sin, Expr};
use dhframe::{parse_expr, parse_parameter, DhError, Parameter};

#[test]
fn parses_dh_entries() {
    assert_eq!(
        parse_expr("-sin(theta)*cos(alpha)").unwrap(),
        mul(neg(sin(Expr::var("theta"))), cos(Expr::var("alpha")))
    );
    assert_eq!(
        parse_expr("a * cos( theta_1 ) + d").unwrap(),
        add(mul(Expr::var("a"), cos(Expr::var("theta_1"))), Expr::var("d"))
    );
    assert_eq!(
        parse_expr("x - 1").unwrap(),
        add(Expr::var("x"), neg(Expr::constant(1.0)))
    );
}

#[test]
fn parses_numeric_literals() {
    assert_eq!(parse_expr("1.5e-3").unwrap(), Expr::Constant(1.5e-3));
    assert_eq!(parse_expr("2.").unwrap(), Expr::Constant(2.0));
    assert_eq!(parse_expr("-0").unwrap(), neg(Expr::Constant(0.0)));
}

#[test]
fn function_names_are_not_reserved_prefixes() {
    assert_eq!(parse_expr("sine").unwrap(), Expr::var("sine"));
    assert_eq!(parse_expr("cosa*2").unwrap(), mul(Expr::var("cosa"), Expr::constant(2.0)));
}

#[test]
fn rejects_malformed_input() {
    for input in ["sin(", "x +", "2 x", "", "sin x", "x / y"] {
        assert!(
            matches!(parse_expr(input), Err(DhError::Parse(_))),
            "expected parse error for {input:?}"
        );
    }
}

#[test]
fn parses_parameters() {
    assert_eq!(parse_parameter("1.5").unwrap(), Parameter::Fixed(1.5));
    assert_eq!(parse_parameter(" -2 ").unwrap(), Parameter::Fixed(-2.0));
    assert_eq!(parse_parameter("theta_1").unwrap(), Parameter::symbol("theta_1"));
    assert_eq!("alpha".parse::<Parameter>().unwrap(), Parameter::symbol("alpha"));
    assert!("1x".parse::<Parameter>().is_err());
    assert!("-q".parse::<Parameter>().is_err());
}

#[test]
fn expr_round_trips_through_display() {
    let expr: Expr = "a*cos(theta) - d*sin(alpha)".parse().unwrap();
    let rendered = expr.to_string();
    assert_eq!(rendered, "a*cos(theta) - d*sin(alpha)");
    assert_eq!(rendered.parse::<Expr>().unwrap(), expr);
}

#[test]
fn non_finite_parameters_round_trip() {
    for value in [f64::INFINITY, f64::NEG_INFINITY] {
        let text = Parameter::Fixed(value).to_string();
        assert_eq!(text.parse::<Parameter>().unwrap(), Parameter::Fixed(value), "parsing {text}");
    }

    let nan = Parameter::Fixed(f64::NAN).to_string().parse::<Parameter>().unwrap();
    assert!(matches!(nan, Parameter::Fixed(v) if v.is_nan()));

    assert_eq!(parse_parameter("Infinity").unwrap(), Parameter::Fixed(f64::INFINITY));
    assert!(matches!(parse_parameter("nan").unwrap(), Parameter::Fixed(v) if v.is_nan()));
}

#[test]
fn words_starting_with_non_finite_names_are_symbols() {
    assert_eq!(parse_parameter("info").unwrap(), Parameter::symbol("info"));
    assert_eq!(parse_parameter("nan_1").unwrap(), Parameter::symbol("nan_1"));
    assert_eq!(parse_parameter("infinityx").unwrap(), Parameter::symbol("infinityx"));
}
