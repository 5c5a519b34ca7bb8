use std::io::{BufWriter, Write};
use std::time::Instant;

use tracing::debug;

use crate::errors::GenerationError;
use crate::generators::Row;
use crate::model::WriteReport;
use crate::output::{CountingWriter, PROGRESS_INTERVAL};

/// Write `row_count` rows pulled from `next_row`, one compact JSON object per
/// line.
pub fn write_jsonlines<W, F>(
    writer: W,
    row_count: u64,
    mut next_row: F,
) -> Result<WriteReport, GenerationError>
where
    W: Write,
    F: FnMut() -> Result<Row, GenerationError>,
{
    let start = Instant::now();
    let mut writer = BufWriter::new(CountingWriter::new(writer));

    let mut rows_written = 0_u64;
    for _ in 0..row_count {
        let row = next_row()?;
        serde_json::to_writer(&mut writer, &row)?;
        writer.write_all(b"\n")?;
        rows_written += 1;

        if rows_written % PROGRESS_INTERVAL == 0 {
            debug!(rows_written, "jsonl rows written");
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
