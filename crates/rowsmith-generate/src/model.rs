use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Column name -> semantic category label (e.g. `"email"`, `"first_name"`).
pub type SpecialColumns = BTreeMap<String, String>;

/// Options for the value generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound for numeric columns without a `minimum`.
    pub default_min: i64,
    /// Upper bound for numeric columns without a `maximum`.
    pub default_max: i64,
    /// Chance that a nullable column yields null.
    pub null_probability: f64,
    /// Seed for reproducible output; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Earliest timestamp produced for date/datetime columns.
    pub earliest: NaiveDateTime,
    /// Latest timestamp produced for date/datetime columns.
    pub latest: NaiveDateTime,
    /// Draw the null decision a second time inside the date/datetime path.
    pub redraw_temporal_nulls: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_min: -1000,
            default_max: 1000,
            null_probability: 0.1,
            seed: None,
            // 1970-01-01 00:00:00
            earliest: NaiveDateTime::default(),
            latest: NaiveDate::from_ymd_opt(2025, 12, 31)
                .and_then(|date| date.and_hms_opt(23, 59, 59))
                .unwrap_or_default(),
            redraw_temporal_nulls: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_null_probability(mut self, probability: f64) -> Self {
        self.null_probability = probability;
        self
    }

    pub fn with_default_bounds(mut self, min: i64, max: i64) -> Self {
        self.default_min = min;
        self.default_max = max;
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(0.0..=1.0).contains(&self.null_probability) {
            return Err(GenerationError::InvalidConfig(format!(
                "null_probability must be within [0, 1], got {}",
                self.null_probability
            )));
        }
        if self.default_min > self.default_max {
            return Err(GenerationError::InvalidConfig(format!(
                "default_min {} is greater than default_max {}",
                self.default_min, self.default_max
            )));
        }
        if self.earliest > self.latest {
            return Err(GenerationError::InvalidConfig(format!(
                "earliest {} is after latest {}",
                self.earliest, self.latest
            )));
        }
        Ok(())
    }
}

/// Options for delimited (CSV) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimitedOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Emit a header line of column names before the data rows.
    pub header: bool,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: true,
        }
    }
}

impl DelimitedOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Summary of a completed write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    /// Data rows written; a header line is not counted.
    pub rows_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_min, -1000);
        assert_eq!(config.default_max, 1000);
        assert_eq!(config.null_probability, 0.1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        for probability in [-0.1, 1.5, f64::NAN] {
            let config = GeneratorConfig::default().with_null_probability(probability);
            assert!(matches!(
                config.validate(),
                Err(GenerationError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn rejects_inverted_defaults_and_window() {
        let config = GeneratorConfig::default().with_default_bounds(5, 1);
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        std::mem::swap(&mut config.earliest, &mut config.latest);
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"null_probability": 0.5, "seed": 7}"#).expect("parse config");
        assert_eq!(config.null_probability, 0.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.default_max, 1000);
        assert!(config.redraw_temporal_nulls);
    }
}
