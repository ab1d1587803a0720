//! Syntax checkers for the supported formats
//!
//! Each checker is a thin adapter over a parsing crate: it hands the raw
//! bytes to the parser and records the verdict. Checkers never interpret
//! why a file failed; the parser's error text is carried verbatim.

pub mod csv;
pub mod ini;
pub mod json;
pub mod toml;
pub mod xml;
pub mod yaml;

/// Extract the short (unqualified) type name from `std::any::type_name`.
///
/// Given `"confcheck_core::checkers::json::JsonChecker"`, returns
/// `"JsonChecker"`. Generic suffixes are stripped first; falls back to the
/// full name when no `::` separator is found.
fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Verdict of checking one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    Invalid { detail: String },
}

impl CheckOutcome {
    pub fn invalid(detail: impl Into<String>) -> Self {
        CheckOutcome::Invalid {
            detail: detail.into(),
        }
    }

    /// Fold a parser result into an outcome, keeping the error's `Display`
    /// text as the detail.
    pub fn from_parse<T, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => CheckOutcome::Valid,
            Err(e) => CheckOutcome::invalid(e.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CheckOutcome::Valid)
    }
}

/// Trait for format syntax checkers.
///
/// Implementors decide whether a byte sequence is a well-formed document of
/// their format. Each checker is created by a
/// [`CheckerFactory`](crate::CheckerFactory) registered in the
/// [`CheckerRegistry`](crate::CheckerRegistry).
///
/// The [`name()`](SyntaxChecker::name) method returns a human-readable
/// identifier; the default implementation derives it from the concrete
/// struct name (e.g. `"JsonChecker"`).
pub trait SyntaxChecker: 'static {
    /// Check the given raw file content for syntactic well-formedness.
    fn check(&self, bytes: &[u8]) -> CheckOutcome;

    /// Return a short, human-readable name for this checker.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}
