mod alias;
mod number;
mod span;

use crate::Unit;
use alias::Alias;
use nom::{
    bytes::complete::take_while,
    combinator::{eof, opt},
};
use number::Number;
use span::{Parse, ParseResult, RawSpan};

/// Inputs longer than this (in characters) are never parsed.
pub const MAX_INPUT_LEN: usize = 100;

/// The `\s` class of ECMAScript regular expressions.
///
/// Differs from [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// `<number><whitespace*><unit?>`, anchored at both ends
#[derive(Debug, PartialEq)]
pub struct DurationExpr {
    pub value: f64,
    pub unit: Unit,
}

impl DurationExpr {
    pub fn millis(&self) -> f64 {
        self.value * self.unit.millis()
    }
}

impl<'a> Parse<'a> for DurationExpr {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, Number(value)) = Number::parse(input)?;
        let (input, _) = take_while(is_separator)(input)?;
        let (input, alias) = opt(Alias::parse)(input)?;
        let (input, _) = eof(input)?;

        Ok((
            input,
            Self {
                value,
                unit: alias.map_or(Unit::Millisecond, |Alias(unit)| unit),
            },
        ))
    }
}

/// Parses a duration string into milliseconds.
///
/// Returns `None` for text that is too long or does not match the grammar.
pub fn parse_duration(s: &str) -> Option<f64> {
    if s.chars().nth(MAX_INPUT_LEN).is_some() {
        log::trace!("rejecting duration string longer than {MAX_INPUT_LEN} characters");
        return None;
    }

    match DurationExpr::parse_from_raw(s) {
        Ok((_, expr)) => {
            log::trace!("parsed {s:?} as {expr:?}");
            Some(expr.millis())
        }
        Err(e) => {
            log::trace!(
                "rejecting duration string {s:?} at column {:?}",
                span::rejected_column(&e)
            );
            None
        }
    }
}
