use crate::cipher::Columnar;
use crate::cli::encode::{append_batch, BatchReport};
use crate::error::Result;
use crate::record::{parse_records, Record};
use std::path::Path;

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Attempt interactive brute-force recovery for records with an empty
    /// key field. Off by default so batch runs never block on an operator.
    pub brute_force: bool,
}

/// Decode every record in `input` and append the resulting batch to
/// `output`.
///
/// Records with an empty key ask for brute-force recovery: with
/// `brute_force` enabled each candidate column ordering is rendered to
/// `confirm` until one is accepted (the recovered key is written out with
/// the plaintext); otherwise the record is skipped with a notice. Rejecting
/// every candidate also skips the record.
pub fn decode_file<F>(
    input: &Path,
    output: &Path,
    options: &DecodeOptions,
    mut confirm: F,
) -> Result<BatchReport>
where
    F: FnMut(&str) -> bool,
{
    let text = std::fs::read_to_string(input)?;
    let records = parse_records(&text)?;

    let mut engine = Columnar::new();
    let mut report = BatchReport::default();
    let mut decoded = Vec::with_capacity(records.len());

    for record in &records {
        engine.set_key(&record.key)?;

        if record.wants_brute_force() {
            if !options.brute_force {
                report.notices.push(format!(
                    "no key for {:?}, skipped (rerun with --brute to recover)",
                    record.message
                ));
                continue;
            }
            match engine.force_decode(&record.message, &mut confirm)? {
                Some(plaintext) => {
                    // Brute force only ever unwinds one pass
                    decoded.push(Record::new(engine.key().letters(), 1, plaintext));
                    report.records += 1;
                }
                None => {
                    report.notices.push(format!(
                        "no ordering confirmed for {:?}, skipped",
                        record.message
                    ));
                }
            }
            continue;
        }

        let plaintext = engine.decode(&record.message, record.passes)?;
        decoded.push(Record::new(
            engine.key().letters(),
            record.passes,
            plaintext,
        ));
        report.records += 1;
    }

    append_batch(output, &decoded)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::{encode_file, EncodeOptions};
    use tempfile::tempdir;

    #[test]
    fn test_decode_file_inverts_encode_file() {
        let dir = tempdir().unwrap();
        let decoded_in = dir.path().join("decoded");
        let encoded = dir.path().join("encoded");
        let decoded_out = dir.path().join("recovered");

        std::fs::write(&decoded_in, "hello:3:Hello World\nzebra:1:ATTACKATDAWN\n").unwrap();
        encode_file(&decoded_in, &encoded, &EncodeOptions::default()).unwrap();

        let report =
            decode_file(&encoded, &decoded_out, &DecodeOptions::default(), |_| false).unwrap();
        assert_eq!(report.records, 2);

        let recovered = parse_records(&std::fs::read_to_string(&decoded_out).unwrap()).unwrap();
        assert_eq!(recovered[0].message, "HELLOWORLD");
        assert_eq!(recovered[1].message, "ATTACKATDAWN");
    }

    #[test]
    fn test_empty_key_skipped_without_brute() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("encoded");
        let output = dir.path().join("decoded");

        std::fs::write(&input, ":1:EO HW LR LL OD\n").unwrap();

        let report =
            decode_file(&input, &output, &DecodeOptions::default(), |_| true).unwrap();
        assert_eq!(report.records, 0);
        assert_eq!(report.notices.len(), 1);
        assert!(report.notices[0].contains("--brute"));
    }

    #[test]
    fn test_brute_force_record_recovers_key_and_plaintext() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("encoded");
        let output = dir.path().join("decoded");

        // encode("HELLOWORLD", 1) under "hello", key field left empty
        std::fs::write(&input, ":1:EO HW LR LL OD\n").unwrap();

        let options = DecodeOptions { brute_force: true };
        let report = decode_file(&input, &output, &options, |grid| {
            grid.chars().filter(|c| !c.is_whitespace()).collect::<String>() == "HELLOWORLD"
        })
        .unwrap();
        assert_eq!(report.records, 1);

        let recovered = parse_records(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(recovered[0].message, "HELLOWORLD");
        assert!(!recovered[0].key.is_empty());
    }
}
