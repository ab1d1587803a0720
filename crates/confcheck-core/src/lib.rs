//! # confcheck-core
//!
//! Core syntax-checking engine for configuration files.
//!
//! Checks:
//! - JSON (`.json`)
//! - YAML (`.yml`, `.yaml`)
//! - TOML (`.toml`)
//! - XML (`.xml`)
//! - INI (`.ini`)
//! - CSV (`.csv`)
//!
//! The engine is a three-stage pipeline: [`FileDiscoverer`] walks the
//! search roots and classifies files by extension, [`ValidationDispatcher`]
//! runs each file through its format checker in parallel, and
//! [`group_results`] optionally folds the flat results into a nested
//! report. [`run_pipeline`] wires the stages together.

pub mod checkers;
pub mod discover;
pub mod dispatch;
pub mod errors;
pub mod file_types;
pub mod group;
pub mod pipeline;
pub mod registry;

use std::path::Path;

pub use checkers::{CheckOutcome, SyntaxChecker};
pub use discover::{DiscoveredFile, Discovery, DiscoveryOptions, FileDiscoverer};
pub use dispatch::{ValidationDispatcher, ValidationResult};
pub use errors::{CheckError, CheckResult};
pub use file_types::FileType;
pub use group::{GroupKey, GroupSpec, GroupedResults, group_results};
pub use pipeline::{RunReport, run_pipeline};
pub use registry::{
    CheckerFactory, CheckerProvider, CheckerRegistration, CheckerRegistry, CheckerRegistryBuilder,
};

/// Check every recognized file under a single root with the default
/// checkers and no grouping.
///
/// This is the one-call entry point for embedding; anything configurable
/// goes through [`run_pipeline`] instead.
pub fn check_path(path: &Path) -> CheckResult<RunReport> {
    let registry = CheckerRegistry::with_defaults();
    let options = DiscoveryOptions::new().with_roots([path]);
    run_pipeline(&options, None, &registry)
}
