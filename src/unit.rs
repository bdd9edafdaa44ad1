use crate::duration::{DAY, HOUR, MINUTE, SECOND, WEEK, YEAR};
use crate::language;

/// A unit of time with a fixed millisecond magnitude.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Debug)]
pub enum Unit {
    /// 1 ms
    Millisecond,

    /// 1 000 ms
    Second,

    /// 60 seconds
    Minute,

    /// 60 minutes
    Hour,

    /// 24 hours
    Day,

    /// 7 days
    Week,

    /// 365.25 days
    Year,
}

/// Units the formatters may pick, largest first.
///
/// Weeks and years are never selected when formatting.
const FORMAT_LADDER: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Year,
    ];

    /// Returns how many milliseconds one of this unit spans.
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => SECOND,
            Self::Minute => MINUTE,
            Self::Hour => HOUR,
            Self::Day => DAY,
            Self::Week => WEEK,
            Self::Year => YEAR,
        }
    }

    /// Short suffix used by the compact formatter.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Year => "y",
        }
    }

    /// Looks up the unit a spelling belongs to, ignoring case.
    ///
    /// Spellings of every supported language are recognized.
    ///
    /// ```
    /// use ms_convert::Unit;
    ///
    /// assert_eq!(Some(Unit::Hour), Unit::from_alias("HRS"));
    /// assert_eq!(Some(Unit::Day), Unit::from_alias("дней"));
    /// assert_eq!(None, Unit::from_alias("kg"));
    /// ```
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        language::alias_table()
            .get(alias.to_lowercase().as_str())
            .copied()
    }

    /// Picks the largest formattable unit that `abs_ms` reaches.
    ///
    /// Returns `None` below one second.
    pub(crate) fn largest_reached(abs_ms: f64) -> Option<Self> {
        FORMAT_LADDER
            .into_iter()
            .find(|unit| abs_ms >= unit.millis())
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn unit_ladder_thresholds() {
        assert_eq!(None, Unit::largest_reached(0.0));
        assert_eq!(None, Unit::largest_reached(999.999));
        assert_eq!(Some(Unit::Second), Unit::largest_reached(1_000.0));
        assert_eq!(Some(Unit::Second), Unit::largest_reached(59_999.0));
        assert_eq!(Some(Unit::Minute), Unit::largest_reached(60_000.0));
        assert_eq!(Some(Unit::Hour), Unit::largest_reached(3_600_000.0));
        assert_eq!(Some(Unit::Day), Unit::largest_reached(86_400_000.0));
    }

    #[test]
    fn unit_ladder_skips_week_and_year() {
        assert_eq!(Some(Unit::Day), Unit::largest_reached(Unit::Week.millis()));
        assert_eq!(Some(Unit::Day), Unit::largest_reached(Unit::Year.millis() * 10.0));
    }

    #[test]
    fn unit_magnitudes_ascend() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0].millis() < pair[1].millis(), "{pair:?}");
        }
    }

    #[test]
    fn unit_from_alias_case_insensitive() {
        assert_eq!(Some(Unit::Millisecond), Unit::from_alias("MS"));
        assert_eq!(Some(Unit::Second), Unit::from_alias("Seconds"));
        assert_eq!(Some(Unit::Minute), Unit::from_alias("МИН"));
        assert_eq!(Some(Unit::Week), Unit::from_alias("Неделя"));
        assert_eq!(None, Unit::from_alias(""));
        assert_eq!(None, Unit::from_alias("msecond"));
    }
}
