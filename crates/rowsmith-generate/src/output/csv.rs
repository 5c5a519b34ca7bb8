use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::errors::GenerationError;
use crate::generators::{GeneratedValue, Row};
use crate::model::{DelimitedOptions, WriteReport};
use crate::output::{CountingWriter, PROGRESS_INTERVAL};

/// Write `row_count` rows pulled from `next_row` as delimited text.
///
/// Fields follow `columns` order; a column missing from a row is written as
/// an empty field. Output already written stays in place if a row fails.
pub fn write_delimited<W, F>(
    writer: W,
    columns: &[&str],
    row_count: u64,
    options: &DelimitedOptions,
    mut next_row: F,
) -> Result<WriteReport, GenerationError>
where
    W: Write,
    F: FnMut() -> Result<Row, GenerationError>,
{
    let start = Instant::now();
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .from_writer(counting);

    if options.header {
        writer.write_record(columns)?;
    }

    let mut rows_written = 0_u64;
    for _ in 0..row_count {
        let row = next_row()?;
        let record: Vec<String> = columns
            .iter()
            .map(|column| {
                row.get(column)
                    .map(GeneratedValue::to_csv)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
        rows_written += 1;

        if rows_written % PROGRESS_INTERVAL == 0 {
            debug!(rows_written, "delimited rows written");
        }
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(WriteReport {
        rows_written,
        bytes_written: counting.bytes_written(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
