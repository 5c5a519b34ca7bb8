use thiserror::Error;

/// Schema error type shared across rowsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The column declares a type outside the supported set.
    #[error("column '{column}' has unsupported type: {type_name}")]
    UnsupportedType { column: String, type_name: String },
    /// Two columns share the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    /// Numeric bounds are inverted, non-finite or not whole numbers.
    #[error("column '{column}' has invalid bounds: {reason}")]
    InvalidBounds { column: String, reason: String },
    /// The column declares an enum with no members.
    #[error("column '{0}' declares an empty enum")]
    EmptyEnum(String),
    /// The date/time format pattern cannot be parsed.
    #[error("column '{column}' has invalid format pattern '{format}'")]
    InvalidFormat { column: String, format: String },
    /// The schema violates structural invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by rowsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
