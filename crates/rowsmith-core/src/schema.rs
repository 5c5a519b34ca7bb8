use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Bound, ColumnType, EnumValue};
use crate::validation::{validate_column, validate_schema};

/// Column metadata document: `{"columns": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaSpec {
    /// Columns in output order.
    pub columns: Vec<ColumnSpec>,
}

/// Raw column descriptor as authored by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnSpec {
    /// Column name; also the row key and the CSV header.
    pub name: String,
    /// Type name (`int`, `long`, `double`, `float`, `date`, `datetime`,
    /// `boolean`, `character`).
    #[serde(rename = "type")]
    pub column_type: String,
    /// Inclusive lower bound for numeric columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Bound>,
    /// Inclusive upper bound for numeric columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Bound>,
    /// Whether null values may be injected.
    #[serde(default)]
    pub nullable: bool,
    /// Allowed literal values; overrides the type when present.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<EnumValue>>,
    /// strftime-style pattern for `date`/`datetime` columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            minimum: None,
            maximum: None,
            nullable: false,
            values: None,
            format: None,
        }
    }

    pub fn with_bounds(mut self, minimum: impl Into<Bound>, maximum: impl Into<Bound>) -> Self {
        self.minimum = Some(minimum.into());
        self.maximum = Some(maximum.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Generation parameters of a validated column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Float {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Date {
        format: String,
    },
    DateTime {
        format: String,
    },
    Boolean,
    Text,
    /// Fixed set of literals; `base` is the declared type it overrides.
    Enum {
        values: Vec<EnumValue>,
        base: ColumnType,
    },
}

impl ColumnKind {
    /// Declared type of the column.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnKind::Integer { .. } => ColumnType::Integer,
            ColumnKind::Float { .. } => ColumnType::Float,
            ColumnKind::Date { .. } => ColumnType::Date,
            ColumnKind::DateTime { .. } => ColumnType::DateTime,
            ColumnKind::Boolean => ColumnType::Boolean,
            ColumnKind::Text => ColumnType::Character,
            ColumnKind::Enum { base, .. } => *base,
        }
    }
}

/// A column descriptor that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    nullable: bool,
    kind: ColumnKind,
}

impl Column {
    pub(crate) fn from_parts(name: String, nullable: bool, kind: ColumnKind) -> Self {
        Self {
            name,
            nullable,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn column_type(&self) -> ColumnType {
        self.kind.column_type()
    }
}

impl TryFrom<ColumnSpec> for Column {
    type Error = Error;

    fn try_from(spec: ColumnSpec) -> Result<Self> {
        validate_column(&spec)
    }
}

impl TryFrom<&ColumnSpec> for Column {
    type Error = Error;

    fn try_from(spec: &ColumnSpec) -> Result<Self> {
        validate_column(spec)
    }
}

/// Ordered, validated set of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Validate column descriptors and build a schema.
    pub fn new<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = ColumnSpec>,
    {
        validate_schema(&SchemaSpec {
            columns: columns.into_iter().collect(),
        })
    }

    pub(crate) fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl TryFrom<SchemaSpec> for Schema {
    type Error = Error;

    fn try_from(spec: SchemaSpec) -> Result<Self> {
        validate_schema(&spec)
    }
}

impl TryFrom<&SchemaSpec> for Schema {
    type Error = Error;

    fn try_from(spec: &SchemaSpec) -> Result<Self> {
        validate_schema(spec)
    }
}
