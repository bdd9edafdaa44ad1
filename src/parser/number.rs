use super::span::{Parse, ParseResult, RawSpan};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Signed decimal literal: `-?(\d+(\.\d+)?|\.\d+)`
///
/// No exponent, no trailing dot, no leading plus.
#[derive(Debug, PartialEq)]
pub struct Number(pub f64);

fn unsigned_digits(input: RawSpan<'_>) -> ParseResult<'_, RawSpan<'_>> {
    alt((
        recognize(pair(digit1, opt(pair(tag("."), digit1)))),
        recognize(pair(tag("."), digit1)),
    ))(input)
}

impl<'a> Parse<'a> for Number {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, value) = map_res(
            recognize(tuple((opt(tag("-")), unsigned_digits))),
            |literal: RawSpan<'a>| literal.fragment().parse::<f64>(),
        )(input)?;

        Ok((input, Self(value)))
    }
}
