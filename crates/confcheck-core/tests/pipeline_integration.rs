//! End-to-end pipeline tests over real directory trees.
//!
//! Each test builds a throwaway tree with tempfile, runs the whole
//! discover / dispatch / group pipeline against it, and asserts on the
//! resulting report.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use confcheck_core::{
    CheckerRegistry, DiscoveryOptions, FileDiscoverer, FileType, GroupSpec, GroupedResults,
    RunReport, run_pipeline,
};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn run(options: &DiscoveryOptions, grouping: Option<&GroupSpec>) -> RunReport {
    let registry = CheckerRegistry::with_defaults();
    run_pipeline(options, grouping, &registry).unwrap()
}

fn node(grouped: &GroupedResults) -> &BTreeMap<String, GroupedResults> {
    match grouped {
        GroupedResults::Node(children) => children,
        GroupedResults::Leaf(_) => panic!("expected a node, got a leaf"),
    }
}

fn leaf_len(grouped: &GroupedResults) -> usize {
    match grouped {
        GroupedResults::Leaf(results) => results.len(),
        GroupedResults::Node(_) => panic!("expected a leaf, got a node"),
    }
}

// ============================================================================
// Missing roots
// ============================================================================

#[test]
fn one_missing_root_still_checks_the_other_and_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good/app.json", "{}");
    write(dir.path(), "good/app.yaml", "k: v\n");
    let missing = dir.path().join("absent");

    let options =
        DiscoveryOptions::new().with_roots([dir.path().join("good"), missing.clone()]);

    // Discovery reports the gap without hiding the healthy root.
    let registry = CheckerRegistry::with_defaults();
    let discovery = FileDiscoverer::new(&registry).discover(&options);
    assert_eq!(discovery.files.len(), 2);
    assert_eq!(discovery.missing_roots, vec![missing.clone()]);
    let message = discovery.root_error().unwrap().to_string();
    assert!(message.contains("search root not found"));
    assert!(message.contains("absent"));

    let report = run(&options, None);
    assert_eq!(report.files_checked, 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.exit_code(), 1);
}

// ============================================================================
// Mixed validity
// ============================================================================

#[test]
fn valid_and_malformed_json_yield_two_results_and_a_failing_exit() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.json", r#"{"service": "api", "port": 8080}"#);
    write(dir.path(), "bad.json", r#"{"service": "api", "port": }"#);

    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), None);

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.exit_code(), 1);

    let bad = report.results.iter().find(|r| !r.valid).unwrap();
    assert_eq!(bad.name, "bad.json");
    assert!(!bad.detail.as_deref().unwrap().is_empty());

    let good = report.results.iter().find(|r| r.valid).unwrap();
    assert!(good.detail.is_none());
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn pass_fail_then_filetype_builds_the_expected_two_level_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.json", "{}");
    write(dir.path(), "b.json", "[1]");
    write(dir.path(), "c.json", r#""three""#);
    write(dir.path(), "broken.json", "{");
    write(dir.path(), "app.yaml", "k: v\n");

    let spec = GroupSpec::parse(["pass-fail", "filetype"]).unwrap();
    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), Some(&spec));

    let outer = node(report.grouped.as_ref().unwrap());
    let passed = node(&outer["Passed"]);
    assert_eq!(leaf_len(&passed["json"]), 3);
    assert_eq!(leaf_len(&passed["yaml"]), 1);
    let failed = node(&outer["Failed"]);
    assert_eq!(leaf_len(&failed["json"]), 1);

    assert_eq!(report.passed_count(), 4);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn grouped_view_and_flat_results_hold_the_same_entries() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "conf/a.json", "{}");
    write(dir.path(), "conf/b.yml", "x: 1\n");
    write(dir.path(), "data/c.toml", "not toml at all [");
    write(dir.path(), "data/d.csv", "a,b\n1,2\n");

    let spec = GroupSpec::parse(["directory", "pass-fail", "filetype"]).unwrap();
    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), Some(&spec));

    let mut flattened: Vec<_> = report
        .grouped
        .as_ref()
        .unwrap()
        .flatten()
        .into_iter()
        .cloned()
        .collect();
    flattened.sort_by(|a, b| a.path.cmp(&b.path));
    let mut flat = report.results.clone();
    flat.sort_by(|a, b| a.path.cmp(&b.path));
    assert_eq!(flattened, flat);
}

#[test]
fn yml_and_yaml_share_one_grouping_bucket_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "x.yml", "a: 1\n");
    write(dir.path(), "x.yaml", "b: 2\n");

    let spec = GroupSpec::parse(["filetype"]).unwrap();
    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), Some(&spec));

    let buckets = node(report.grouped.as_ref().unwrap());
    assert_eq!(buckets.len(), 1);
    assert_eq!(leaf_len(&buckets["yaml"]), 2);
}

// ============================================================================
// Combined traversal options
// ============================================================================

#[test]
fn exclusions_and_depth_compose() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app.json", "{}");
    write(dir.path(), "conf/db.toml", "k = 1\n");
    write(dir.path(), "conf/deep/too-far.json", "{}");
    write(dir.path(), "vendor/third.json", "{}");
    write(dir.path(), "metrics.csv", "a,b\n1,2\n");

    let options = DiscoveryOptions::new()
        .with_roots([dir.path()])
        .with_exclude_dirs(["vendor"])
        .with_exclude_types([FileType::Csv])
        .with_depth(1);
    let report = run(&options, None);

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["app.json", "db.toml"]);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn flat_results_come_back_sorted_by_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "z.json", "{}");
    write(dir.path(), "a/m.yaml", "k: v\n");
    write(dir.path(), "b.toml", "k = 1\n");

    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), None);

    let paths: Vec<_> = report.results.iter().map(|r| r.path.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

// ============================================================================
// Serialized report shape
// ============================================================================

#[test]
fn grouped_tree_serializes_as_nested_objects() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.json", "{}");
    write(dir.path(), "b.json", "{");

    let spec = GroupSpec::parse(["pass-fail", "filetype"]).unwrap();
    let report = run(&DiscoveryOptions::new().with_roots([dir.path()]), Some(&spec));

    let value = serde_json::to_value(report.grouped.as_ref().unwrap()).unwrap();
    assert!(value["Passed"]["json"].is_array());
    assert!(value["Failed"]["json"].is_array());
    assert_eq!(value["Failed"]["json"][0]["name"], "b.json");
}
