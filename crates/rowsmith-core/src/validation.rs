use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::error::{Error, Result};
use crate::schema::{Column, ColumnKind, ColumnSpec, Schema, SchemaSpec};
use crate::types::{Bound, ColumnType};
use crate::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT};

/// Validate a schema document and build the ordered column set.
///
/// This checks:
/// - every column passes [`validate_column`]
/// - column names are unique
pub fn validate_schema(spec: &SchemaSpec) -> Result<Schema> {
    let mut names = BTreeSet::new();
    let mut columns = Vec::with_capacity(spec.columns.len());

    for column_spec in &spec.columns {
        let column = validate_column(column_spec)?;
        if !names.insert(column.name().to_string()) {
            return Err(Error::DuplicateColumn(column.name().to_string()));
        }
        columns.push(column);
    }

    Ok(Schema::from_columns(columns))
}

/// Validate one column descriptor and resolve its generation parameters.
///
/// The type is checked even when an enum list overrides it. Bounds are only
/// interpreted for numeric columns and formats only for temporal ones.
pub fn validate_column(spec: &ColumnSpec) -> Result<Column> {
    if spec.name.trim().is_empty() {
        return Err(Error::InvalidSchema(
            "column name must not be empty".to_string(),
        ));
    }

    let column_type =
        ColumnType::parse(&spec.column_type).ok_or_else(|| Error::UnsupportedType {
            column: spec.name.clone(),
            type_name: spec.column_type.clone(),
        })?;

    if let Some(values) = &spec.values {
        if values.is_empty() {
            return Err(Error::EmptyEnum(spec.name.clone()));
        }
        return Ok(Column::from_parts(
            spec.name.clone(),
            spec.nullable,
            ColumnKind::Enum {
                values: values.clone(),
                base: column_type,
            },
        ));
    }

    let kind = match column_type {
        ColumnType::Integer => {
            let minimum = integral_bound(&spec.name, "minimum", spec.minimum)?;
            let maximum = integral_bound(&spec.name, "maximum", spec.maximum)?;
            check_order(&spec.name, minimum, maximum)?;
            ColumnKind::Integer { minimum, maximum }
        }
        ColumnType::Float => {
            let minimum = finite_bound(&spec.name, "minimum", spec.minimum)?;
            let maximum = finite_bound(&spec.name, "maximum", spec.maximum)?;
            check_order(&spec.name, minimum, maximum)?;
            ColumnKind::Float { minimum, maximum }
        }
        ColumnType::Date => ColumnKind::Date {
            format: resolve_format(spec, DEFAULT_DATE_FORMAT)?,
        },
        ColumnType::DateTime => ColumnKind::DateTime {
            format: resolve_format(spec, DEFAULT_DATETIME_FORMAT)?,
        },
        ColumnType::Boolean => ColumnKind::Boolean,
        ColumnType::Character => ColumnKind::Text,
    };

    Ok(Column::from_parts(spec.name.clone(), spec.nullable, kind))
}

/// Reject strftime patterns chrono cannot render.
///
/// A pattern that parses can still fail to render a naive timestamp (`%z`,
/// `%Z`), so a fixed instant is rendered as well.
pub fn validate_format(column: &str, format: &str) -> Result<()> {
    let invalid = || Error::InvalidFormat {
        column: column.to_string(),
        format: format.to_string(),
    };
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::default().format(format)).map_err(|_| invalid())?;
    Ok(())
}

fn resolve_format(spec: &ColumnSpec, default: &str) -> Result<String> {
    match spec.format.as_deref() {
        Some(format) if !format.is_empty() => {
            validate_format(&spec.name, format)?;
            Ok(format.to_string())
        }
        _ => Ok(default.to_string()),
    }
}

fn integral_bound(column: &str, label: &str, bound: Option<Bound>) -> Result<Option<i64>> {
    bound
        .map(|value| {
            value.as_i64().ok_or_else(|| Error::InvalidBounds {
                column: column.to_string(),
                reason: format!("{label} {value} is not a whole number"),
            })
        })
        .transpose()
}

fn finite_bound(column: &str, label: &str, bound: Option<Bound>) -> Result<Option<f64>> {
    bound
        .map(|value| {
            let value = value.as_f64();
            if value.is_finite() {
                Ok(value)
            } else {
                Err(Error::InvalidBounds {
                    column: column.to_string(),
                    reason: format!("{label} must be finite"),
                })
            }
        })
        .transpose()
}

fn check_order<T>(column: &str, minimum: Option<T>, maximum: Option<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    match (minimum, maximum) {
        (Some(min), Some(max)) if min > max => Err(Error::InvalidBounds {
            column: column.to_string(),
            reason: format!("minimum {min} is greater than maximum {max}"),
        }),
        _ => Ok(()),
    }
}
