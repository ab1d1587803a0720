//! YAML syntax checking via serde_yaml

use super::{CheckOutcome, SyntaxChecker};

pub struct YamlChecker;

impl SyntaxChecker for YamlChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        CheckOutcome::from_parse(serde_yaml::from_slice::<serde_yaml::Value>(bytes))
    }
}
