mod english;
mod russian;

pub use english::English;
pub use russian::Russian;

use crate::Unit;
use std::sync::OnceLock;

/// Spellings of a single unit.
pub type AliasSet = (Unit, &'static [&'static str]);

/// Unit names and pluralization rule of one language.
pub trait Profile: Sync {
    /// Lowercase spellings the parser accepts, grouped by unit.
    fn aliases(&self) -> &'static [AliasSet];

    /// Name of `unit` as printed by the verbose formatter.
    ///
    /// `abs_ms` is the unrounded absolute input, `count` the absolute
    /// rounded quotient that gets printed before the name.
    fn unit_name(&self, unit: Unit, abs_ms: f64, count: f64) -> &'static str;

    /// Suffix printed after values below one second.
    fn millis_suffix(&self) -> &'static str;
}

/// Language used for verbose formatting.
#[derive(Clone, Copy, Default, PartialEq, Eq, std::hash::Hash, Debug)]
pub enum Language {
    /// "1 second", "2 seconds"
    #[default]
    English,

    /// "1 секунда", "2 секунды", "5 секунд"
    Russian,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 2] = [Self::English, Self::Russian];

    pub(crate) fn profile(self) -> &'static dyn Profile {
        match self {
            Self::English => &English,
            Self::Russian => &Russian,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            _ => Err(format!("unknown language {s:?}, expected one of: en, ru")),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Russian => write!(f, "ru"),
        }
    }
}

/// Maps every known spelling (of every language) to its unit.
pub(crate) fn alias_table() -> &'static crate::HashMap<&'static str, Unit> {
    static TABLE: OnceLock<crate::HashMap<&'static str, Unit>> = OnceLock::new();

    TABLE.get_or_init(|| {
        let mut map = crate::HashMap::default();

        for language in Language::ALL {
            for (unit, spellings) in language.profile().aliases() {
                for spelling in *spellings {
                    if let Some(prev) = map.insert(*spelling, *unit) {
                        log::warn!("alias {spelling:?} is claimed by both {prev:?} and {unit:?}");
                    }
                }
            }
        }

        log::trace!("built alias table with {} spellings", map.len());

        map
    })
}
