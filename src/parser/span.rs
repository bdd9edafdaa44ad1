use nom::IResult;
use nom_locate::LocatedSpan;

/// Input of every duration sub-parser, tracks the column for diagnostics
#[allow(clippy::module_name_repetitions)]
pub type RawSpan<'a> = LocatedSpan<&'a str>;

pub type ParseResult<'a, T> = IResult<RawSpan<'a>, T>;

/// A piece of a duration string that can be parsed from a span
pub trait Parse<'a>: Sized {
    /// Parse the given span into self
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self>;

    /// Wraps `input` into a span starting at column 1 and parses it
    fn parse_from_raw(input: &'a str) -> ParseResult<'a, Self> {
        Self::parse(LocatedSpan::new(input))
    }
}

/// Column (in characters, starting at 1) where parsing gave up
pub fn rejected_column(err: &nom::Err<nom::error::Error<RawSpan<'_>>>) -> Option<usize> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => Some(e.input.get_utf8_column()),
        nom::Err::Incomplete(_) => None,
    }
}
