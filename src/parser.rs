use crate::error::{DhError, Result};
use crate::expr::Expr;
use crate::parameter::Parameter;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{
    alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of, satisfy,
};
use nom::combinator::{all_consuming, map, map_res, not, opt, recognize, value};
use nom::error::VerboseError;
use nom::multi::{fold_many0, many0_count};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(DhError::Parse(format!("{e:?}"))),
    }
}

/// Parse a single DH parameter: a signed number (finite or not) or an identifier.
pub fn parse_parameter(input: &str) -> Result<Parameter> {
    match all_consuming(ws(alt((parse_fixed, parse_symbol))))(input) {
        Ok((_, parameter)) => Ok(parameter),
        Err(e) => Err(DhError::Parse(format!("{e:?}"))),
    }
}

fn parse_fixed(input: &str) -> IResult<&str, Parameter, VerboseError<&str>> {
    let (rest, sign) = opt(ws(char('-')))(input)?;
    let (rest, number) = alt((parse_float, parse_non_finite))(rest)?;
    let number = if sign.is_some() { -number } else { number };
    Ok((rest, Parameter::Fixed(number)))
}

/// `inf`, `infinity` and `nan` in any case; these words never name a symbol.
fn parse_non_finite(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    terminated(
        alt((
            value(f64::INFINITY, tag_no_case("infinity")),
            value(f64::INFINITY, tag_no_case("inf")),
            value(f64::NAN, tag_no_case("nan")),
        )),
        not(satisfy(|c| c.is_alphanumeric() || c == '_')),
    )(input)
}

fn parse_symbol(input: &str) -> IResult<&str, Parameter, VerboseError<&str>> {
    map(parse_identifier_name, |name: &str| Parameter::symbol(name))(input)
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul(input)?;
    fold_many0(
        pair(ws(one_of("+-")), parse_mul),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '-' => Expr::Add(acc.boxed(), Expr::Neg(rhs.boxed()).boxed()),
            _ => Expr::Add(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        preceded(ws(char('*')), parse_unary),
        move || init.clone(),
        |acc, rhs| Expr::Mul(acc.boxed(), rhs.boxed()),
    )(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, parse_function, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_function(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, (name, arg)) = pair(ws(alt((tag("sin"), tag("cos")))), parse_parens)(input)?;

    let expr = match name {
        "sin" => Expr::Sin(arg.boxed()),
        _ => Expr::Cos(arg.boxed()),
    };

    Ok((rest, expr))
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(ws(parse_float), Expr::constant)(input)
}

/// Unsigned decimal literal with optional fraction and exponent.
fn parse_float(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    map_res(
        recognize(tuple((
            digit1,
            opt(pair(char('.'), digit0)),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        str::parse::<f64>,
    )(input)
}

fn parse_identifier_name(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn parse_identifier(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(ws(parse_identifier_name), |name: &str| Expr::var(name))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
