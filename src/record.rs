//! Plain-text record format shared by the encode and decode batch files.
//!
//! One record per line, `key:passes:message`. The key field may be empty,
//! meaning the key is unknown and brute-force recovery is requested; an
//! empty or zero passes field means one pass. The message may itself
//! contain colons. A blank line separates batches; writers always append a
//! trailing blank line after their batch.

use crate::error::{Result, ScytaleError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub passes: usize,
    pub message: String,
}

impl Record {
    pub fn new(key: impl Into<String>, passes: usize, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            passes: passes.max(1),
            message: message.into(),
        }
    }

    /// Whether this record asks for brute-force recovery instead of a
    /// keyed decode.
    pub fn wants_brute_force(&self) -> bool {
        self.key.is_empty()
    }

    fn parse(line: &str, line_number: usize) -> Result<Self> {
        let mut fields = line.splitn(3, ':');
        let key = fields.next().unwrap_or("");
        let passes = fields
            .next()
            .ok_or(ScytaleError::InvalidRecord { line: line_number })?;
        let message = fields
            .next()
            .ok_or(ScytaleError::InvalidRecord { line: line_number })?;
        if message.is_empty() {
            return Err(ScytaleError::InvalidRecord { line: line_number });
        }

        let passes = if passes.is_empty() {
            1
        } else {
            passes
                .parse::<usize>()
                .map_err(|_| ScytaleError::InvalidRecord { line: line_number })?
        };

        Ok(Self::new(key, passes, message))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.key, self.passes, self.message)
    }
}

/// Parse every record in a batch file, skipping blank separator lines.
/// Line numbers in errors are 1-based.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(Record::parse(line, index + 1)?);
    }
    Ok(records)
}

/// Format a batch for appending to a record file: one record per line plus
/// the trailing blank separator line.
pub fn format_batch(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}
