use crate::Language;

/// Formatting options for [`crate::convert`] and [`crate::format`].
///
/// Parsing is not affected by any option.
///
/// ```
/// use ms_convert::{format, Language, Options};
///
/// let options = Options::default().long(true).language(Language::Russian);
/// assert_eq!(format(180_000.0, &options)?, "3 минуты");
///
/// # Ok::<(), ms_convert::Error>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Options {
    long: bool,
    language: Language,
}

impl Options {
    /// Compact, English formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// If `true`, numbers are formatted with full, pluralized unit names
    /// ("2 days") instead of abbreviations ("2d").
    ///
    /// Default = false
    #[must_use]
    pub fn long(mut self, enabled: bool) -> Self {
        self.long = enabled;
        self
    }

    /// Sets the language used for full unit names.
    ///
    /// Has no effect unless [`Options::long`] is enabled.
    ///
    /// Default = [`Language::English`]
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Returns `true` if verbose formatting is enabled.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.long
    }

    /// Returns the language used for full unit names.
    #[must_use]
    pub fn selected_language(&self) -> Language {
        self.language
    }
}
