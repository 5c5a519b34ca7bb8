//! Core contracts for rowsmith.
//!
//! This crate defines the column descriptor types consumed by the generator,
//! the validated schema model built from them, and schema validation.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{Column, ColumnKind, ColumnSpec, Schema, SchemaSpec};
pub use types::{Bound, ColumnType, EnumValue};
pub use validation::{validate_column, validate_format, validate_schema};

/// Default format for `date` columns without an explicit `format`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Default format for `datetime` columns without an explicit `format`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
