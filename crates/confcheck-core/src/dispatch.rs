//! Dispatching discovered files to their syntax checkers.

use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::checkers::CheckOutcome;
use crate::discover::DiscoveredFile;
use crate::errors::{CheckError, CheckResult};
use crate::file_types::FileType;
use crate::registry::CheckerRegistry;

/// The outcome of checking one (path, file type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Base name of the checked file.
    pub name: String,
    /// Path as discovered.
    pub path: PathBuf,
    /// The file type whose checker produced this result.
    pub file_type: FileType,
    /// Whether the content parsed cleanly.
    pub valid: bool,
    /// Parser diagnostic for invalid files. Always `None` when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ValidationResult {
    pub fn passed(file: &DiscoveredFile) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.clone(),
            file_type: file.file_type,
            valid: true,
            detail: None,
        }
    }

    pub fn failed(file: &DiscoveredFile, detail: impl Into<String>) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.clone(),
            file_type: file.file_type,
            valid: false,
            detail: Some(detail.into()),
        }
    }
}

/// Runs every discovered file through the checker its file type maps to.
///
/// Files are checked in parallel; the result order always matches the input
/// order, so a sorted discovery yields a sorted report.
pub struct ValidationDispatcher<'a> {
    registry: &'a CheckerRegistry,
}

impl<'a> ValidationDispatcher<'a> {
    pub fn new(registry: &'a CheckerRegistry) -> Self {
        Self { registry }
    }

    /// Check every file and collect one [`ValidationResult`] per input.
    ///
    /// A file whose content fails to parse produces an invalid result, not
    /// an error. A file whose bytes cannot be read is an environment
    /// problem rather than a syntax problem and aborts the dispatch with
    /// [`CheckError::ReadFailure`]. A file type with no registered checker
    /// produces an invalid result naming the gap.
    pub fn dispatch(&self, files: &[DiscoveredFile]) -> CheckResult<Vec<ValidationResult>> {
        files
            .par_iter()
            .map(|file| self.check_one(file))
            .collect()
    }

    fn check_one(&self, file: &DiscoveredFile) -> CheckResult<ValidationResult> {
        let bytes = fs::read(&file.path).map_err(|source| CheckError::ReadFailure {
            path: file.path.clone(),
            source,
        })?;

        let Some(checker) = self.registry.checker_for(file.file_type) else {
            return Ok(ValidationResult::failed(
                file,
                format!("no checker registered for file type '{}'", file.file_type),
            ));
        };

        Ok(match checker.check(&bytes) {
            CheckOutcome::Valid => ValidationResult::passed(file),
            CheckOutcome::Invalid { detail } => ValidationResult::failed(file, detail),
        })
    }
}
