use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use rowsmith_core::{Column, ColumnKind, Schema};

use crate::errors::GenerationError;
use crate::generators::primitives::{
    bool_value, float_in_range, format_timestamp, int_in_range, null_draw, pick_enum,
    timestamp_in_window, word_count,
};
use crate::generators::semantic::{FakeProvider, SemanticCategory, SemanticProvider};
use crate::generators::{GeneratedValue, Row};
use crate::model::{DelimitedOptions, GeneratorConfig, SpecialColumns, WriteReport};
use crate::output;

const PROVIDER_SEED_KEY: &str = "semantic-provider";

/// Generates rows for a schema with a reproducible random stream.
///
/// Every generating call takes `&mut self`: the random sequence is owned by
/// the instance and advances with each value.
#[derive(Debug)]
pub struct DataGenerator<P = FakeProvider> {
    schema: Schema,
    synth: Synthesizer<P>,
}

impl DataGenerator<FakeProvider> {
    /// Create a generator backed by the `fake` provider.
    pub fn new(schema: Schema, config: GeneratorConfig) -> Result<Self, GenerationError> {
        Self::with_provider(schema, config, FakeProvider::new(0))
    }
}

impl<P: SemanticProvider> DataGenerator<P> {
    /// Create a generator with a custom semantic-value provider.
    ///
    /// The provider is reseeded from the configured seed, so its prior state
    /// does not leak into the output.
    pub fn with_provider(
        schema: Schema,
        config: GeneratorConfig,
        mut provider: P,
    ) -> Result<Self, GenerationError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        provider.reseed(hash_seed(seed, PROVIDER_SEED_KEY));

        debug!(
            columns = schema.len(),
            seeded = config.seed.is_some(),
            null_probability = config.null_probability,
            "generator created"
        );

        Ok(Self {
            schema,
            synth: Synthesizer {
                rng: ChaCha8Rng::seed_from_u64(seed),
                config,
                special: BTreeMap::new(),
                provider,
            },
        })
    }

    /// Bind columns to semantic categories, consuming and returning `self`.
    pub fn with_special_columns(
        mut self,
        special: &SpecialColumns,
    ) -> Result<Self, GenerationError> {
        self.set_special_columns(special)?;
        Ok(self)
    }

    /// Replace the special-column map.
    ///
    /// Unknown category labels fail here. Entries for columns that are absent
    /// or not free-text are kept but have no effect.
    pub fn set_special_columns(
        &mut self,
        special: &SpecialColumns,
    ) -> Result<(), GenerationError> {
        let mut resolved = BTreeMap::new();
        for (column, label) in special {
            let category: SemanticCategory =
                label
                    .parse()
                    .map_err(|_| GenerationError::UnknownSemanticCategory {
                        column: column.clone(),
                        category: label.clone(),
                    })?;
            match self.schema.column(column).map(Column::kind) {
                Some(ColumnKind::Text) => {}
                Some(_) => warn!(
                    column = %column,
                    category = %category,
                    "special column is not free-text; category ignored"
                ),
                None => warn!(
                    column = %column,
                    category = %category,
                    "special column not found in schema"
                ),
            }
            resolved.insert(column.clone(), category);
        }
        self.synth.special = resolved;
        Ok(())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.synth.config
    }

    /// Last explicitly configured seed.
    pub fn seed(&self) -> Option<u64> {
        self.synth.config.seed
    }

    /// Reseed the numeric stream and the provider together.
    pub fn set_seed(&mut self, seed: u64) {
        self.synth.config.seed = Some(seed);
        self.synth.rng = ChaCha8Rng::seed_from_u64(seed);
        self.synth
            .provider
            .reseed(hash_seed(seed, PROVIDER_SEED_KEY));
        debug!(seed, "generator reseeded");
    }

    /// Generate one value for `column`.
    pub fn generate_value(&mut self, column: &Column) -> Result<GeneratedValue, GenerationError> {
        self.synth.generate(column)
    }

    /// Generate one row for the generator's schema.
    pub fn generate_row(&mut self) -> Result<Row, GenerationError> {
        self.synth.generate_row(&self.schema)
    }

    /// Generate one row for another schema, sharing this generator's stream.
    pub fn generate_row_with(&mut self, schema: &Schema) -> Result<Row, GenerationError> {
        self.synth.generate_row(schema)
    }

    /// Lazily generate `count` rows.
    pub fn rows(
        &mut self,
        count: u64,
    ) -> impl Iterator<Item = Result<Row, GenerationError>> + '_ {
        (0..count).map(move |_| self.generate_row())
    }

    /// Write `row_count` rows as delimited text to an open writer.
    ///
    /// The writer is flushed but not closed; pass `&mut w` to keep using it.
    pub fn write_delimited<W: Write>(
        &mut self,
        writer: W,
        row_count: u64,
        options: &DelimitedOptions,
    ) -> Result<WriteReport, GenerationError> {
        let Self { schema, synth } = self;
        let schema: &Schema = schema;
        let columns: Vec<&str> = schema.names().collect();

        info!(
            rows = row_count,
            columns = columns.len(),
            delimiter = %char::from(options.delimiter),
            header = options.header,
            "writing delimited output"
        );
        let report = output::csv::write_delimited(writer, &columns, row_count, options, || {
            synth.generate_row(schema)
        })?;
        info!(
            rows_written = report.rows_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "delimited output written"
        );
        Ok(report)
    }

    /// Write `row_count` delimited rows to `path`, creating or truncating it.
    pub fn write_delimited_to_path(
        &mut self,
        path: impl AsRef<Path>,
        row_count: u64,
        options: &DelimitedOptions,
    ) -> Result<WriteReport, GenerationError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!(path = %path.display(), "output file opened");
        self.write_delimited(BufWriter::new(file), row_count, options)
    }

    /// Write `row_count` rows as JSON lines to an open writer.
    pub fn write_jsonlines<W: Write>(
        &mut self,
        writer: W,
        row_count: u64,
    ) -> Result<WriteReport, GenerationError> {
        let Self { schema, synth } = self;
        let schema: &Schema = schema;

        info!(rows = row_count, columns = schema.len(), "writing jsonl output");
        let report =
            output::jsonl::write_jsonlines(writer, row_count, || synth.generate_row(schema))?;
        info!(
            rows_written = report.rows_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "jsonl output written"
        );
        Ok(report)
    }

    /// Write `row_count` JSON lines to `path`, creating or truncating it.
    pub fn write_jsonlines_to_path(
        &mut self,
        path: impl AsRef<Path>,
        row_count: u64,
    ) -> Result<WriteReport, GenerationError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!(path = %path.display(), "output file opened");
        self.write_jsonlines(BufWriter::new(file), row_count)
    }
}

#[derive(Debug)]
struct Synthesizer<P> {
    rng: ChaCha8Rng,
    config: GeneratorConfig,
    special: BTreeMap<String, SemanticCategory>,
    provider: P,
}

impl<P: SemanticProvider> Synthesizer<P> {
    fn generate_row(&mut self, schema: &Schema) -> Result<Row, GenerationError> {
        let mut row = Row::with_capacity(schema.len());
        for column in schema.columns() {
            let value = self.generate(column)?;
            row.insert(column.name(), value);
        }
        Ok(row)
    }

    fn generate(&mut self, column: &Column) -> Result<GeneratedValue, GenerationError> {
        if self.null_selected(column) {
            return Ok(GeneratedValue::Null);
        }

        match column.kind() {
            ColumnKind::Enum { values, .. } => Ok(pick_enum(&mut self.rng, values)),
            ColumnKind::Integer { minimum, maximum } => {
                let min = minimum.unwrap_or(self.config.default_min);
                let max = maximum.unwrap_or(self.config.default_max);
                if min > max {
                    return Err(invalid_bounds(column, min, max));
                }
                Ok(GeneratedValue::Int(int_in_range(&mut self.rng, min, max)))
            }
            ColumnKind::Float { minimum, maximum } => {
                let min = minimum.unwrap_or(self.config.default_min as f64);
                let max = maximum.unwrap_or(self.config.default_max as f64);
                if min > max || !(max - min).is_finite() {
                    return Err(invalid_bounds(column, min, max));
                }
                Ok(GeneratedValue::Float(float_in_range(&mut self.rng, min, max)))
            }
            ColumnKind::Date { format } | ColumnKind::DateTime { format } => {
                if self.config.redraw_temporal_nulls && self.null_selected(column) {
                    return Ok(GeneratedValue::Null);
                }
                let value =
                    timestamp_in_window(&mut self.rng, self.config.earliest, self.config.latest);
                Ok(GeneratedValue::Text(format_timestamp(
                    column.name(),
                    value,
                    format,
                )?))
            }
            ColumnKind::Boolean => Ok(GeneratedValue::Bool(bool_value(&mut self.rng))),
            ColumnKind::Text => Ok(GeneratedValue::Text(self.text(column.name()))),
        }
    }

    fn null_selected(&mut self, column: &Column) -> bool {
        let would_be_null = null_draw(&mut self.rng, self.config.null_probability);
        column.is_nullable() && would_be_null
    }

    fn text(&mut self, column: &str) -> String {
        match self.special.get(column) {
            Some(category) => self.provider.category(*category),
            None => {
                let count = word_count(&mut self.rng);
                self.provider.words(count).join(" ")
            }
        }
    }
}

fn invalid_bounds(
    column: &Column,
    minimum: impl ToString,
    maximum: impl ToString,
) -> GenerationError {
    GenerationError::InvalidBounds {
        column: column.name().to_string(),
        minimum: minimum.to_string(),
        maximum: maximum.to_string(),
    }
}

/// FNV-1a mix of `seed` and `key`. The provider draws a varying number of
/// samples per value, so it gets its own stream and numeric columns stay put
/// when the provider changes.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
