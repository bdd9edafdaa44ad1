use super::span::{Parse, ParseResult, RawSpan};
use crate::Unit;
use nom::{
    bytes::complete::take_while1,
    error::{Error, ErrorKind},
};

/// A unit spelling such as `hrs`, `Minutes` or `сек`.
#[derive(Debug, PartialEq, Eq)]
pub struct Alias(pub Unit);

impl<'a> Parse<'a> for Alias {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (rest, word) = take_while1(|c: char| c.is_alphabetic())(input)?;

        match Unit::from_alias(word.fragment()) {
            Some(unit) => Ok((rest, Self(unit))),
            None => {
                log::trace!("unknown unit {:?}", word.fragment());
                Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
            }
        }
    }
}
