//! Grouping of validation results along report dimensions.
//!
//! Grouping is a single recursive fold over the key list: each level
//! partitions its input into labeled buckets and recurses with the
//! remaining keys, so one, two, and three dimensions are all the same
//! code path.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::dispatch::ValidationResult;
use crate::errors::{CheckError, CheckResult};

/// One grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// The claiming file type identifier (`"json"`, `"yaml"`, ...). Both
    /// `.yml` and `.yaml` files land under `"yaml"`.
    FileType,
    /// The parent directory of the file, with a trailing separator so the
    /// same directory always yields the same label.
    Directory,
    /// The two-way partition into `"Passed"` and `"Failed"`.
    PassFail,
}

impl GroupKey {
    /// Extract this dimension's bucket label from a result.
    fn label_of(self, result: &ValidationResult) -> String {
        match self {
            Self::FileType => result.file_type.to_string(),
            Self::Directory => {
                let parent = result
                    .path
                    .parent()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if parent.is_empty() {
                    "./".to_string()
                } else {
                    format!("{}/", parent.trim_end_matches('/'))
                }
            }
            Self::PassFail => {
                if result.valid { "Passed" } else { "Failed" }.to_string()
            }
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FileType => "filetype",
            Self::Directory => "directory",
            Self::PassFail => "pass-fail",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GroupKey {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filetype" | "file-type" => Ok(Self::FileType),
            "directory" => Ok(Self::Directory),
            "pass-fail" | "passfail" => Ok(Self::PassFail),
            _ => Err(CheckError::InvalidGroupKey {
                name: s.to_string(),
            }),
        }
    }
}

/// A validated, ordered list of grouping dimensions.
///
/// Construction is the only place grouping input is checked, so a held
/// `GroupSpec` is always usable: between one and three keys, no repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    keys: Vec<GroupKey>,
}

impl GroupSpec {
    /// Validate a key list into a spec.
    pub fn new(keys: Vec<GroupKey>) -> CheckResult<Self> {
        if keys.is_empty() || keys.len() > 3 {
            return Err(CheckError::InvalidGroupKeyCount { count: keys.len() });
        }
        for (index, key) in keys.iter().enumerate() {
            if keys[..index].contains(key) {
                return Err(CheckError::DuplicateGroupKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { keys })
    }

    /// Parse dimension names (as supplied on a command line) into a spec.
    pub fn parse<I, S>(names: I) -> CheckResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<CheckResult<Vec<GroupKey>>>()?;
        Self::new(keys)
    }

    pub fn keys(&self) -> &[GroupKey] {
        &self.keys
    }
}

/// A grouped report: leaves hold results, nodes hold labeled sub-trees.
///
/// Labels within a node iterate in lexicographic order. Only labels that
/// actually occur are present; there are no empty buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupedResults {
    Leaf(Vec<ValidationResult>),
    Node(BTreeMap<String, GroupedResults>),
}

impl GroupedResults {
    /// Collect every result in the tree, depth first.
    pub fn flatten(&self) -> Vec<&ValidationResult> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a ValidationResult>) {
        match self {
            Self::Leaf(results) => out.extend(results.iter()),
            Self::Node(children) => {
                for child in children.values() {
                    child.collect_into(out);
                }
            }
        }
    }
}

/// Group results along the spec's dimensions, outermost first.
///
/// The partition is deterministic and lossless: every input result appears
/// in exactly one leaf, and leaves preserve the relative input order of
/// their members.
pub fn group_results(results: Vec<ValidationResult>, spec: &GroupSpec) -> GroupedResults {
    group_by_keys(results, spec.keys())
}

fn group_by_keys(results: Vec<ValidationResult>, keys: &[GroupKey]) -> GroupedResults {
    let Some((first, rest)) = keys.split_first() else {
        return GroupedResults::Leaf(results);
    };

    let mut buckets: BTreeMap<String, Vec<ValidationResult>> = BTreeMap::new();
    for result in results {
        buckets.entry(first.label_of(&result)).or_default().push(result);
    }

    GroupedResults::Node(
        buckets
            .into_iter()
            .map(|(label, members)| (label, group_by_keys(members, rest)))
            .collect(),
    )
}
