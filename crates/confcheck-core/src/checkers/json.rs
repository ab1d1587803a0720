//! JSON syntax checking via serde_json
//!
//! serde_json handles malformed input gracefully (returns errors instead of
//! panicking), so arbitrary bytes are safe to feed through.

use super::{CheckOutcome, SyntaxChecker};

pub struct JsonChecker;

impl SyntaxChecker for JsonChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        CheckOutcome::from_parse(serde_json::from_slice::<serde_json::Value>(bytes))
    }
}
