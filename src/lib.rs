//! Converts between human-readable durations and milliseconds.
//!
//! Strings are parsed into a millisecond count, numbers are formatted into a
//! short (`"2d"`) or long (`"2 days"`) string. Unit spellings are recognized in
//! English and Russian, ignoring case:
//!
//! ```
//! use ms_convert::{convert, parse, format, Converted, Language, Options};
//!
//! assert_eq!(parse("2 days")?, Some(172_800_000.0));
//! assert_eq!(parse("1.5h")?, Some(5_400_000.0));
//! assert_eq!(parse("3 МИНУТЫ")?, Some(180_000.0));
//!
//! // Text that is not a duration is not an error
//! assert_eq!(parse("5 kg")?, None);
//!
//! assert_eq!(format(60_000.0, &Options::default())?, "1m");
//! assert_eq!(format(-3_600_000.0, &Options::default().long(true))?, "-1 hour");
//!
//! let options = Options::default().long(true).language(Language::Russian);
//! assert_eq!(
//!     convert(432_000_000.0, &options)?,
//!     Some(Converted::Text("5 дней".into())),
//! );
//!
//! // Empty strings and non-finite numbers are errors
//! assert!(parse("").is_err());
//! assert!(format(f64::NAN, &Options::default()).is_err());
//!
//! # Ok::<(), ms_convert::Error>(())
//! ```
//!
//! Formatting picks the largest of day, hour, minute and second that the
//! value reaches and rounds the quotient, so information is lost:
//! `format(1_500_000.0)` is `"25m"`.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod formatter;
mod language;
mod options;
mod parser;
mod unit;

type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

pub use duration::{Duration, DAY, HOUR, MINUTE, SECOND, WEEK, YEAR};
pub use error::{Error, Result};
pub use language::Language;
pub use options::Options;
pub use parser::MAX_INPUT_LEN;
pub use unit::Unit;

/// Input of [`convert`]: duration text or a millisecond count.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Value<'a> {
    /// Text to parse, e.g. `"2 days"`
    Text(&'a str),

    /// Milliseconds to format
    Number(f64),
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Value<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Value<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

/// Output of [`convert`].
#[derive(Clone, PartialEq, Debug)]
pub enum Converted {
    /// Milliseconds parsed from text
    Millis(f64),

    /// Text formatted from milliseconds
    Text(String),
}

impl Converted {
    /// Returns the milliseconds, if text was parsed.
    #[must_use]
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Text(_) => None,
        }
    }

    /// Returns the formatted text, if a number was formatted.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Millis(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Converted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{}", formatter::Millis(*ms)),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Parses text or formats a number, depending on the kind of `value`.
///
/// Returns `Ok(None)` if text was given that is not a duration
/// (see [`parse`]).
///
/// # Errors
///
/// Returns error if `value` is an empty string or a non-finite number.
pub fn convert<'a, V: Into<Value<'a>>>(value: V, options: &Options) -> Result<Option<Converted>> {
    match value.into() {
        Value::Text(s) => Ok(parse(s)?.map(Converted::Millis)),
        Value::Number(ms) => Ok(Some(Converted::Text(format(ms, options)?))),
    }
}

/// Parses a duration string into milliseconds.
///
/// The string is a number (`"5"`, `"-1.5"`, `".25"`), optionally followed by
/// whitespace and a unit (`"5 minutes"`, `"1.5h"`, `"2 дня"`). Without a unit,
/// the number is taken as milliseconds.
///
/// Returns `Ok(None)` if the string is longer than [`MAX_INPUT_LEN`]
/// characters or is not a duration.
///
/// # Errors
///
/// Returns error if `s` is empty.
pub fn parse(s: &str) -> Result<Option<f64>> {
    if s.is_empty() {
        return Err(Error::InvalidInput(Value::Text(s).to_string()));
    }

    Ok(parser::parse_duration(s))
}

/// Formats a millisecond count.
///
/// # Errors
///
/// Returns error if `ms` is NaN or infinite.
pub fn format(ms: f64, options: &Options) -> Result<String> {
    if !ms.is_finite() {
        return Err(Error::InvalidInput(Value::Number(ms).to_string()));
    }

    Ok(if options.is_long() {
        formatter::verbose(ms, options.selected_language().profile())
    } else {
        formatter::compact(ms)
    })
}
