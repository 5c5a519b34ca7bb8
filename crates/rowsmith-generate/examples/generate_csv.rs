use std::env;
use std::io;
use std::path::PathBuf;

use rowsmith_core::{Schema, SchemaSpec};
use rowsmith_generate::{DataGenerator, DelimitedOptions, GeneratorConfig, SpecialColumns};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut special_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;
    let mut rows: u64 = 10;
    let mut seed: Option<u64> = None;
    let mut jsonl = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => schema_path = args.next().map(PathBuf::from),
            "--special" => special_path = args.next().map(PathBuf::from),
            "--out" => out_path = args.next().map(PathBuf::from),
            "--rows" => rows = args.next().ok_or("missing --rows value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            "--jsonl" => jsonl = true,
            _ => {
                if schema_path.is_none() {
                    schema_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let schema_path = schema_path.ok_or("missing --schema path")?;
    let spec: SchemaSpec = serde_json::from_str(&std::fs::read_to_string(&schema_path)?)?;
    let schema = Schema::try_from(spec)?;

    let special: SpecialColumns = match special_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
        None => SpecialColumns::new(),
    };

    let config = match seed {
        Some(seed) => GeneratorConfig::default().with_seed(seed),
        None => GeneratorConfig::default(),
    };
    let mut generator = DataGenerator::new(schema, config)?.with_special_columns(&special)?;

    let options = DelimitedOptions::default();
    let report = match (out_path, jsonl) {
        (Some(path), true) => generator.write_jsonlines_to_path(path, rows)?,
        (Some(path), false) => generator.write_delimited_to_path(path, rows, &options)?,
        (None, true) => generator.write_jsonlines(io::stdout().lock(), rows)?,
        (None, false) => generator.write_delimited(io::stdout().lock(), rows, &options)?,
    };

    eprintln!(
        "rows={} bytes={} duration_ms={}",
        report.rows_written, report.bytes_written, report.duration_ms
    );
    Ok(())
}
