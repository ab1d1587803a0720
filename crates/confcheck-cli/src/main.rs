//! confcheck CLI tool.
//!
//! Usage:
//! ```bash
//! confcheck [OPTIONS] [ROOTS]...
//! ```

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use confcheck_core::{CheckError, CheckerRegistry, run_pipeline};

mod config;
mod output;

use config::{FileConfig, Settings};

/// Syntax checker for configuration files (JSON, YAML, TOML, XML, INI, CSV)
#[derive(Parser)]
#[command(name = "confcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directories or files to search (default: current directory)
    #[arg(value_name = "ROOTS")]
    roots: Vec<PathBuf>,

    /// Directory base names to skip at any depth (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    exclude_dirs: Vec<String>,

    /// File types to skip: json, yaml, toml, xml, ini, csv (comma-separated)
    #[arg(long, value_name = "TYPES", value_delimiter = ',')]
    exclude_file_types: Vec<String>,

    /// Maximum directory depth below each root (omit for unlimited)
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    /// Group results by up to three keys in nesting order:
    /// filetype, directory, pass-fail (comma-separated)
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    group_by: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Print failing results and the summary only
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output format for check reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-result compact format.
    Compact,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let file_config = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, file_config)?;

    let registry = CheckerRegistry::with_defaults();
    let report = run_pipeline(&settings.options, settings.grouping.as_ref(), &registry)?;

    tracing::debug!(
        "checked {} files in {} ms",
        report.files_checked,
        report.duration_ms
    );

    if !report.missing_roots.is_empty() {
        let root_error = CheckError::RootNotFound {
            roots: report.missing_roots.clone(),
        };
        tracing::warn!("{root_error}");
    }

    output::print(&report, settings.format, settings.quiet)?;
    Ok(report.exit_code())
}
