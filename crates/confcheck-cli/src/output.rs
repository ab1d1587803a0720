//! Shared output formatting for check reports.

use anyhow::Result;
use colored::Colorize;
use confcheck_core::{GroupedResults, RunReport, ValidationResult};

use crate::OutputFormat;

/// Print a run report in the specified format.
pub fn print(report: &RunReport, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, quiet),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &RunReport, quiet: bool) {
    match &report.grouped {
        Some(grouped) => print_grouped(grouped, 0, quiet),
        None => {
            for result in &report.results {
                print_result_line(result, 0, quiet);
            }
        }
    }

    let passed = report.passed_count();
    let failed = report.failed_count();
    let summary = format!("{passed} passed, {failed} failed");
    if failed > 0 {
        println!("\n{}", summary.red().bold());
    } else {
        println!("\n{}", summary.green().bold());
    }
}

fn print_grouped(grouped: &GroupedResults, indent: usize, quiet: bool) {
    match grouped {
        GroupedResults::Leaf(results) => {
            for result in results {
                print_result_line(result, indent, quiet);
            }
        }
        GroupedResults::Node(children) => {
            for (label, child) in children {
                println!("{}{}", "  ".repeat(indent), label.bold());
                print_grouped(child, indent + 1, quiet);
            }
        }
    }
}

fn print_result_line(result: &ValidationResult, indent: usize, quiet: bool) {
    let pad = "  ".repeat(indent);
    if result.valid {
        if !quiet {
            println!("{pad}{} {}", "PASS".green().bold(), result.path.display());
        }
    } else {
        println!("{pad}{} {}", "FAIL".red().bold(), result.path.display());
        if let Some(detail) = &result.detail {
            println!("{pad}     {}", detail.dimmed());
        }
    }
}

fn print_json(report: &RunReport) -> Result<()> {
    let summary = serde_json::json!({
        "passed": report.passed_count(),
        "failed": report.failed_count(),
        "files_checked": report.files_checked,
        "duration_ms": report.duration_ms,
    });
    let payload = match &report.grouped {
        Some(grouped) => serde_json::json!({ "summary": summary, "grouped": grouped }),
        None => serde_json::json!({ "summary": summary, "results": report.results }),
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_compact(report: &RunReport) {
    for result in &report.results {
        let status = if result.valid { "PASS" } else { "FAIL" };
        match &result.detail {
            Some(detail) => println!("{}: {status} {detail}", result.path.display()),
            None => println!("{}: {status}", result.path.display()),
        }
    }
}
