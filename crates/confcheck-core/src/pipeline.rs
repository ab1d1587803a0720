//! The end-to-end run: discover, dispatch, optionally group, summarize.

use std::path::PathBuf;
use std::time::Instant;

use crate::discover::{DiscoveryOptions, FileDiscoverer};
use crate::dispatch::{ValidationDispatcher, ValidationResult};
use crate::errors::CheckResult;
use crate::group::{GroupSpec, GroupedResults, group_results};
use crate::registry::CheckerRegistry;

/// Everything one run produced, ready for a reporter.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunReport {
    /// Flat results in discovery order.
    pub results: Vec<ValidationResult>,
    /// The grouped view, present only when grouping was requested.
    pub grouped: Option<GroupedResults>,
    /// Configured roots that did not exist. Non-empty forces a failing
    /// exit status even when every checked file passed.
    pub missing_roots: Vec<PathBuf>,
    pub files_checked: usize,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn new(results: Vec<ValidationResult>, missing_roots: Vec<PathBuf>) -> Self {
        let files_checked = results.len();
        Self {
            results,
            grouped: None,
            missing_roots,
            files_checked,
            duration_ms: 0,
        }
    }

    pub fn with_timing(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Attach the grouped view for the given spec.
    pub fn with_grouping(mut self, spec: &GroupSpec) -> Self {
        self.grouped = Some(group_results(self.results.clone(), spec));
        self
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.valid).count()
    }

    /// Process exit status for this run: `1` if any result failed or any
    /// root was missing, `0` otherwise. Never anything else, regardless of
    /// how many files failed.
    pub fn exit_code(&self) -> i32 {
        if self.failed_count() > 0 || !self.missing_roots.is_empty() {
            1
        } else {
            0
        }
    }
}

/// Run the full pipeline over `options` with the given registry.
///
/// Missing roots are recorded in the report rather than aborting, so one
/// bad root does not hide results from the good ones. The only hard error
/// is an unreadable file (see
/// [`ValidationDispatcher::dispatch`]).
pub fn run_pipeline(
    options: &DiscoveryOptions,
    grouping: Option<&GroupSpec>,
    registry: &CheckerRegistry,
) -> CheckResult<RunReport> {
    let started = Instant::now();

    let discovery = FileDiscoverer::new(registry).discover(options);
    let results = ValidationDispatcher::new(registry).dispatch(&discovery.files)?;

    let mut report = RunReport::new(results, discovery.missing_roots);
    if let Some(spec) = grouping {
        report = report.with_grouping(spec);
    }
    Ok(report.with_timing(started.elapsed().as_millis() as u64))
}
