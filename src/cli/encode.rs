use crate::cipher::Columnar;
use crate::error::Result;
use crate::record::{format_batch, parse_records, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub collision_check: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            collision_check: true,
        }
    }
}

/// Outcome of a batch run: how many records were processed, plus any
/// notices the caller should surface (warnings, skipped records).
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: usize,
    pub notices: Vec<String>,
}

/// Encode every record in `input` and append the resulting batch to
/// `output`. Each record is encoded under its own key and pass count;
/// output records carry the sanitized key so the file decodes as written.
pub fn encode_file(input: &Path, output: &Path, options: &EncodeOptions) -> Result<BatchReport> {
    let text = std::fs::read_to_string(input)?;
    let records = parse_records(&text)?;

    let mut engine = Columnar::with_collision_check(options.collision_check);
    let mut report = BatchReport::default();
    let mut encoded = Vec::with_capacity(records.len());

    for record in &records {
        engine.set_key(&record.key)?;
        let outcome = engine.encode(&record.message, record.passes)?;
        for warning in &outcome.warnings {
            report
                .notices
                .push(format!("{}: {}", record.key, warning));
        }
        encoded.push(Record::new(
            engine.key().letters(),
            record.passes,
            outcome.ciphertext,
        ));
        report.records += 1;
    }

    append_batch(output, &encoded)?;
    Ok(report)
}

pub(crate) fn append_batch(output: &Path, records: &[Record]) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(output)?;
    file.write_all(format_batch(records).as_bytes())?;
    Ok(())
}
