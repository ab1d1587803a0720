//! TOML syntax checking via the toml crate
//!
//! TOML documents are UTF-8 by definition, so undecodable bytes are an
//! ordinary syntax failure rather than a pipeline error.

use super::{CheckOutcome, SyntaxChecker};

pub struct TomlChecker;

impl SyntaxChecker for TomlChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        match std::str::from_utf8(bytes) {
            Ok(text) => CheckOutcome::from_parse(text.parse::<toml::Table>()),
            Err(e) => CheckOutcome::invalid(e.to_string()),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn check_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = TomlChecker.check(&bytes);
        }
    }
}
