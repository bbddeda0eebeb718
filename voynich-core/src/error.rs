use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Signing
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Wrapped external errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// First rule a transaction or period broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transaction must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must be a number")]
    NotNumeric(&'static str),
    #[error("field `{0}` must not be negative")]
    Negative(&'static str),
    #[error("field `fixed` must be a boolean")]
    FixedNotBoolean,
    #[error("field `due` is not a valid date")]
    UnparsableDue,
    #[error("unknown transaction action")]
    UnknownAction,
    #[error("month {0} outside 1..=12")]
    MonthOutOfRange(u32),
    #[error("year {0} outside 1000..=9999")]
    YearOutOfRange(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
