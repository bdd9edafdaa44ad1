use super::{AliasSet, Profile};
use crate::Unit;

const ALIASES: &[AliasSet] = &[
    (
        Unit::Millisecond,
        &["милисекунды", "милисекунд", "милисекунда", "мс"],
    ),
    (Unit::Second, &["секунд", "секунды", "секунда", "сек", "с"]),
    (Unit::Minute, &["минуты", "минута", "минут", "мин", "м"]),
    (Unit::Hour, &["часов", "часа", "час", "ч"]),
    (Unit::Day, &["дней", "дня", "день", "д"]),
    (Unit::Week, &["недель", "недели", "неделя", "н"]),
    (Unit::Year, &["года", "год", "лет", "г"]),
];

/// Grammatical number of a counted noun.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Form {
    /// 1, 21, 31, ...
    One,

    /// 2-4, 22-24, ...
    Two,

    /// 0, 5-20, 25-30, ...
    Many,
}

impl Form {
    fn of(count: u64) -> Self {
        let rem100 = count % 100;

        if (5..=20).contains(&rem100) {
            return Self::Many;
        }

        match rem100 % 10 {
            1 => Self::One,
            2..=4 => Self::Two,
            _ => Self::Many,
        }
    }
}

/// Russian unit names with one/few/many plural forms.
pub struct Russian;

impl Russian {
    fn forms(unit: Unit) -> [&'static str; 3] {
        match unit {
            Unit::Millisecond => ["милисекунда", "милисекунды", "милисекунд"],
            Unit::Second => ["секунда", "секунды", "секунд"],
            Unit::Minute => ["минута", "минуты", "минут"],
            Unit::Hour => ["час", "часа", "часов"],
            Unit::Day => ["день", "дня", "дней"],
            Unit::Week => ["неделя", "недели", "недель"],
            Unit::Year => ["год", "года", "лет"],
        }
    }
}

impl Profile for Russian {
    fn aliases(&self) -> &'static [AliasSet] {
        ALIASES
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn unit_name(&self, unit: Unit, _abs_ms: f64, count: f64) -> &'static str {
        let [one, two, many] = Self::forms(unit);

        // Remainder is exact for any finite count, the cast is not
        match Form::of((count.abs() % 100.0) as u64) {
            Form::One => one,
            Form::Two => two,
            Form::Many => many,
        }
    }

    fn millis_suffix(&self) -> &'static str {
        "мс"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn russian_form_of_count() {
        assert_eq!(Form::Many, Form::of(0));
        assert_eq!(Form::One, Form::of(1));
        assert_eq!(Form::Two, Form::of(2));
        assert_eq!(Form::Two, Form::of(4));
        assert_eq!(Form::Many, Form::of(5));
        assert_eq!(Form::Many, Form::of(11));
        assert_eq!(Form::Many, Form::of(12));
        assert_eq!(Form::Many, Form::of(20));
        assert_eq!(Form::One, Form::of(21));
        assert_eq!(Form::Two, Form::of(22));
        assert_eq!(Form::Many, Form::of(25));
        assert_eq!(Form::One, Form::of(101));
        assert_eq!(Form::Many, Form::of(111));
        assert_eq!(Form::Two, Form::of(1_003));
    }

    #[test]
    fn russian_unit_names() {
        assert_eq!("минута", Russian.unit_name(Unit::Minute, 60_000.0, 1.0));
        assert_eq!("минуты", Russian.unit_name(Unit::Minute, 180_000.0, 3.0));
        assert_eq!("минут", Russian.unit_name(Unit::Minute, 300_000.0, 5.0));
        assert_eq!("часов", Russian.unit_name(Unit::Hour, 0.0, 11.0));
        assert_eq!("дня", Russian.unit_name(Unit::Day, 0.0, 23.0));
    }

    #[test]
    fn russian_unit_names_huge_count() {
        // 2^70 ends in ...24
        assert_eq!("дня", Russian.unit_name(Unit::Day, 0.0, 2f64.powi(70)));
        assert_eq!("дней", Russian.unit_name(Unit::Day, 0.0, 1e22));
        assert_eq!("дня", Russian.unit_name(Unit::Day, 0.0, -(2f64.powi(70))));
    }

    #[test]
    fn russian_names_are_parseable() {
        for unit in Unit::ALL {
            for form in Russian::forms(unit) {
                assert_eq!(Some(unit), Unit::from_alias(form), "{form:?}");
            }
        }
    }
}
