use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported column types, parsed from the descriptor's `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Float,
    Date,
    DateTime,
    Boolean,
    Character,
}

impl ColumnType {
    /// Parse a descriptor type name. `long` and `double` are accepted aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "int" | "long" => Some(Self::Integer),
            "double" | "float" => Some(Self::Float),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "boolean" => Some(Self::Boolean),
            "character" => Some(Self::Character),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "double",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Boolean => "boolean",
            Self::Character => "character",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal allowed in a column's `enum` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EnumValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Text(value.to_string())
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Int(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        EnumValue::Int(i64::from(value))
    }
}

/// Numeric bound as written in the descriptor.
///
/// Integers are kept exact so `long` columns are not rounded through `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Bound {
    Int(i64),
    Float(f64),
}

impl Bound {
    pub fn as_f64(self) -> f64 {
        match self {
            Bound::Int(value) => value as f64,
            Bound::Float(value) => value,
        }
    }

    /// Integral value of the bound, if it has one.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Bound::Int(value) => Some(value),
            Bound::Float(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value <= i64::MAX as f64 =>
            {
                Some(value as i64)
            }
            Bound::Float(_) => None,
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Int(value)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Int(i64::from(value))
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Float(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(value) => write!(f, "{value}"),
            Bound::Float(value) => write!(f, "{value}"),
        }
    }
}
