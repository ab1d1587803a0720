//! INI syntax checking via rust-ini

use ini::Ini;

use super::{CheckOutcome, SyntaxChecker};

pub struct IniChecker;

impl SyntaxChecker for IniChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        match std::str::from_utf8(bytes) {
            Ok(text) => CheckOutcome::from_parse(Ini::load_from_str(text)),
            Err(e) => CheckOutcome::invalid(e.to_string()),
        }
    }
}
