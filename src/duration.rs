/// Milliseconds in one second.
pub const SECOND: f64 = 1_000.0;

/// Milliseconds in one minute.
pub const MINUTE: f64 = SECOND * 60.0;

/// Milliseconds in one hour.
pub const HOUR: f64 = MINUTE * 60.0;

/// Milliseconds in one day.
pub const DAY: f64 = HOUR * 24.0;

/// Milliseconds in one week.
pub const WEEK: f64 = DAY * 7.0;

/// Milliseconds in one (Julian) year.
pub const YEAR: f64 = DAY * 365.25;

/// Helpers for calculating durations in milliseconds
///
/// ```
/// use ms_convert::{format, Duration, Options};
///
/// assert_eq!(Duration::minutes(1.5), 90_000.0);
/// assert_eq!(format(Duration::days(2.0), &Options::default())?, "2d");
///
/// # Ok::<(), ms_convert::Error>(())
/// ```
pub struct Duration;

impl Duration {
    /// Formats N years as millisecond time frame.
    ///
    /// A year is 365.25 days.
    #[must_use]
    pub fn years(n: f64) -> f64 {
        n * YEAR
    }

    /// Formats N weeks as millisecond time frame.
    #[must_use]
    pub fn weeks(n: f64) -> f64 {
        n * WEEK
    }

    /// Formats N days as millisecond time frame.
    #[must_use]
    pub fn days(n: f64) -> f64 {
        n * DAY
    }

    /// Formats N hours as millisecond time frame.
    #[must_use]
    pub fn hours(n: f64) -> f64 {
        n * HOUR
    }

    /// Formats N minutes as millisecond time frame.
    #[must_use]
    pub fn minutes(n: f64) -> f64 {
        n * MINUTE
    }

    /// Formats N seconds as millisecond time frame.
    #[must_use]
    pub fn seconds(n: f64) -> f64 {
        n * SECOND
    }

    /// Formats N milliseconds as millisecond time frame.
    #[must_use]
    pub fn millis(n: f64) -> f64 {
        n
    }
}
