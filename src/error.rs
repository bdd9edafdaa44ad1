/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is neither a non-empty string nor a finite number.
    ///
    /// Carries the serialized form of the offending value.
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(val) => {
                write!(
                    f,
                    "val is not a non-empty string or a valid number. val={val}",
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
