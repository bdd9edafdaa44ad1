use crate::{language::Profile, Unit};

/// Rounds half-way cases towards positive infinity, so `-2.5` becomes `-2`.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();

    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Prints a millisecond count without a trailing `.0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Millis(pub f64);

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // NOTE: Negative zero prints as plain zero
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Formats `ms` as e.g. `2d`, `-1m` or `500ms`.
pub fn compact(ms: f64) -> String {
    match Unit::largest_reached(ms.abs()) {
        Some(unit) => {
            let count = round_half_up(ms / unit.millis());
            format!("{}{}", Millis(count), unit.abbreviation())
        }
        None => format!("{}{}", Millis(ms), Unit::Millisecond.abbreviation()),
    }
}

/// Formats `ms` as e.g. `2 days` or `1 minute`, using the given language.
pub fn verbose(ms: f64, profile: &dyn Profile) -> String {
    let abs = ms.abs();

    match Unit::largest_reached(abs) {
        Some(unit) => {
            let count = round_half_up(ms / unit.millis());
            let name = profile.unit_name(unit, abs, count.abs());
            format!("{} {name}", Millis(count))
        }
        None => format!("{} {}", Millis(ms), profile.millis_suffix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{English, Russian};
    use test_log::test;

    #[test]
    fn round_half_up_matches_ties_towards_infinity() {
        assert_eq!(2.0, round_half_up(1.5));
        assert_eq!(-1.0, round_half_up(-1.5));
        assert_eq!(-2.0, round_half_up(-2.5));
        assert_eq!(3.0, round_half_up(2.5));
        assert_eq!(1.0, round_half_up(1.4999));
        assert_eq!(0.0, round_half_up(0.499_999_999_999_999_94));
        assert_eq!(-3.0, round_half_up(-2.6));
    }

    #[test]
    fn millis_display() {
        assert_eq!("500", Millis(500.0).to_string());
        assert_eq!("1.5", Millis(1.5).to_string());
        assert_eq!("-42", Millis(-42.0).to_string());
        assert_eq!("0", Millis(-0.0).to_string());
    }

    #[test]
    fn compact_units() {
        assert_eq!("500ms", compact(500.0));
        assert_eq!("0ms", compact(0.0));
        assert_eq!("1s", compact(1_000.0));
        assert_eq!("10s", compact(10_000.0));
        assert_eq!("1m", compact(60_000.0));
        assert_eq!("10m", compact(600_000.0));
        assert_eq!("1h", compact(3_600_000.0));
        assert_eq!("1d", compact(86_400_000.0));
        assert_eq!("7d", compact(604_800_000.0));
        assert_eq!("365d", compact(31_557_600_000.0));
    }

    #[test]
    fn compact_negative() {
        assert_eq!("-500ms", compact(-500.0));
        assert_eq!("-1s", compact(-1_000.0));
        assert_eq!("-1m", compact(-60_000.0));
        assert_eq!("-10h", compact(-36_000_000.0));
    }

    #[test]
    fn compact_rounds_quotient_only() {
        assert_eq!("2s", compact(1_500.0));
        assert_eq!("-1s", compact(-1_500.0));
        assert_eq!("1.5ms", compact(1.5));
        assert_eq!("999ms", compact(999.0));
    }

    #[test]
    fn verbose_english() {
        assert_eq!("500 ms", verbose(500.0, &English));
        assert_eq!("1 second", verbose(1_000.0, &English));
        assert_eq!("1 second", verbose(1_100.0, &English));
        assert_eq!("2 seconds", verbose(1_500.0, &English));
        assert_eq!("10 seconds", verbose(10_000.0, &English));
        assert_eq!("1 minute", verbose(60_000.0, &English));
        assert_eq!("1 hour", verbose(3_600_000.0, &English));
        assert_eq!("1 day", verbose(86_400_000.0, &English));
        assert_eq!("10 days", verbose(864_000_000.0, &English));
    }

    #[test]
    fn verbose_english_negative() {
        assert_eq!("-500 ms", verbose(-500.0, &English));
        assert_eq!("-1 second", verbose(-1_000.0, &English));
        assert_eq!("-1 seconds", verbose(-1_500.0, &English));
        assert_eq!("-10 minutes", verbose(-600_000.0, &English));
    }

    #[test]
    fn verbose_russian_minutes() {
        let minutes = |n: f64| verbose(n * 60_000.0, &Russian);

        assert_eq!("1 минута", minutes(1.0));
        assert_eq!("2 минуты", minutes(2.0));
        assert_eq!("4 минуты", minutes(4.0));
        assert_eq!("5 минут", minutes(5.0));
        assert_eq!("11 минут", minutes(11.0));
        assert_eq!("20 минут", minutes(20.0));
        assert_eq!("21 минута", minutes(21.0));
        assert_eq!("22 минуты", minutes(22.0));
        assert_eq!("-3 минуты", minutes(-3.0));
    }

    #[test]
    fn verbose_russian_other_units() {
        assert_eq!("500 мс", verbose(500.0, &Russian));
        assert_eq!("1 секунда", verbose(1_000.0, &Russian));
        assert_eq!("2 секунды", verbose(1_500.0, &Russian));
        assert_eq!("5 часов", verbose(18_000_000.0, &Russian));
        assert_eq!("3 дня", verbose(259_200_000.0, &Russian));
    }

    #[test]
    fn verbose_russian_huge_count() {
        let printed = verbose(2f64.powi(70) * 86_400_000.0, &Russian);
        assert!(printed.ends_with(" дня"), "{printed}");
    }
}
