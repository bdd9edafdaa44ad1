use super::{AliasSet, Profile};
use crate::Unit;

const ALIASES: &[AliasSet] = &[
    (
        Unit::Millisecond,
        &["milliseconds", "millisecond", "msecs", "msec", "ms"],
    ),
    (Unit::Second, &["seconds", "second", "secs", "sec", "s"]),
    (Unit::Minute, &["minutes", "minute", "mins", "min", "m"]),
    (Unit::Hour, &["hours", "hour", "hrs", "hr", "h"]),
    (Unit::Day, &["days", "day", "d"]),
    (Unit::Week, &["weeks", "week", "w"]),
    (Unit::Year, &["years", "year", "yrs", "yr", "y"]),
];

/// English unit names, plural once the value reaches one and a half units.
pub struct English;

impl English {
    fn names(unit: Unit) -> (&'static str, &'static str) {
        match unit {
            Unit::Millisecond => ("millisecond", "milliseconds"),
            Unit::Second => ("second", "seconds"),
            Unit::Minute => ("minute", "minutes"),
            Unit::Hour => ("hour", "hours"),
            Unit::Day => ("day", "days"),
            Unit::Week => ("week", "weeks"),
            Unit::Year => ("year", "years"),
        }
    }
}

impl Profile for English {
    fn aliases(&self) -> &'static [AliasSet] {
        ALIASES
    }

    // NOTE: Compares the raw value, not the printed count, so 1.6s is "2 seconds"
    // and 1.4s is "1 second"
    fn unit_name(&self, unit: Unit, abs_ms: f64, _count: f64) -> &'static str {
        let (singular, plural) = Self::names(unit);

        if abs_ms >= unit.millis() * 1.5 {
            plural
        } else {
            singular
        }
    }

    fn millis_suffix(&self) -> &'static str {
        "ms"
    }
}
