//! CSV structure checking via the csv crate
//!
//! CSV has no schema to validate against; well-formedness here means every
//! record parses and carries the same field count as the first record
//! (`flexible(false)`). Records are read as raw bytes since CSV payloads
//! are not required to be UTF-8.

use super::{CheckOutcome, SyntaxChecker};

pub struct CsvChecker;

impl SyntaxChecker for CsvChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(bytes);

        for record in reader.byte_records() {
            if let Err(e) = record {
                return CheckOutcome::invalid(e.to_string());
            }
        }
        CheckOutcome::Valid
    }
}
