//! Error types for the checking pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type CheckResult<T> = Result<T, CheckError>;

/// Pipeline errors.
///
/// Per-file syntax failures are not errors: they travel inside
/// [`ValidationResult`](crate::ValidationResult) as `valid: false` plus a
/// detail string. This enum covers the conditions that stop a run (or, for
/// [`RootNotFound`](CheckError::RootNotFound), force a failing exit status
/// while the remaining roots are still searched).
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("search root not found: {}", join_paths(.roots))]
    RootNotFound { roots: Vec<PathBuf> },

    #[error("failed to read file: {path}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown group key: '{name}' (expected filetype, directory, or pass-fail)")]
    InvalidGroupKey { name: String },

    #[error("grouping requires between 1 and 3 keys, got {count}")]
    InvalidGroupKeyCount { count: usize },

    #[error("duplicate group key: '{key}'")]
    DuplicateGroupKey { key: String },

    #[error("unknown file type: '{name}' (known types: {})", known_file_types())]
    UnknownFileType { name: String },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn known_file_types() -> String {
    crate::file_types::FileType::ALL
        .iter()
        .map(|t| t.identifier())
        .collect::<Vec<_>>()
        .join(", ")
}
