use thiserror::Error;

/// Errors emitted by the generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("schema error: {0}")]
    Schema(#[from] rowsmith_core::Error),
    #[error("column '{column}' maps to unknown semantic category '{category}'")]
    UnknownSemanticCategory { column: String, category: String },
    #[error("column '{column}' has invalid bounds: minimum {minimum} > maximum {maximum}")]
    InvalidBounds {
        column: String,
        minimum: String,
        maximum: String,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("column '{column}' could not be formatted with '{format}'")]
    Format { column: String, format: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
