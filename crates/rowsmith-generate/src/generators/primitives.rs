use std::fmt::Write as _;

use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use rand::seq::IndexedRandom;

use rowsmith_core::EnumValue;

use crate::errors::GenerationError;
use crate::generators::GeneratedValue;

/// Word count range for free-text columns without a semantic category.
pub const MIN_WORDS: usize = 1;
pub const MAX_WORDS: usize = 10;

/// Weighted null draw. Consumes exactly one sample for any probability,
/// including 0 and 1, so the stream position never depends on the config.
pub fn null_draw<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

pub fn int_in_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

pub fn float_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random_range(min..=max)
}

pub fn bool_value<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

pub fn pick_enum<R: Rng + ?Sized>(rng: &mut R, values: &[EnumValue]) -> GeneratedValue {
    values
        .choose(rng)
        .map(GeneratedValue::from)
        .unwrap_or(GeneratedValue::Null)
}

pub fn word_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(MIN_WORDS..=MAX_WORDS)
}

/// Uniform timestamp with whole-second resolution in `[earliest, latest]`.
pub fn timestamp_in_window<R: Rng + ?Sized>(
    rng: &mut R,
    earliest: NaiveDateTime,
    latest: NaiveDateTime,
) -> NaiveDateTime {
    let span = (latest - earliest).num_seconds().max(0);
    let offset = rng.random_range(0..=span);
    earliest
        .checked_add_signed(TimeDelta::seconds(offset))
        .unwrap_or(latest)
}

/// Render a timestamp; a pattern chrono cannot render is an error, not a panic.
pub fn format_timestamp(
    column: &str,
    value: NaiveDateTime,
    format: &str,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    write!(out, "{}", value.format(format)).map_err(|_| GenerationError::Format {
        column: column.to_string(),
        format: format.to_string(),
    })?;
    Ok(out)
}
