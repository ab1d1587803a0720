//! Configuration file loading and flag/config/default merging.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use confcheck_core::{DiscoveryOptions, FileType, GroupSpec};

use crate::{Cli, OutputFormat};

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".confcheck.toml";

/// On-disk configuration. Every field is optional; anything unset falls
/// through to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub exclude_file_types: Vec<String>,
    #[serde(default)]
    pub depth: Option<usize>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub quiet: bool,
}

impl FileConfig {
    /// Load configuration.
    ///
    /// An explicitly given path must exist and parse. Without one, the
    /// default file is loaded only when present; its absence is not an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("malformed config file {}", path.display()))
    }
}

/// Effective settings for one run, after precedence resolution: flags
/// override config-file values, which override built-in defaults.
#[derive(Debug)]
pub struct Settings {
    pub options: DiscoveryOptions,
    pub grouping: Option<GroupSpec>,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Settings {
    pub fn merge(cli: &Cli, config: FileConfig) -> Result<Self> {
        let roots = if cli.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            cli.roots.clone()
        };

        let exclude_dirs = if cli.exclude_dirs.is_empty() {
            config.exclude_dirs
        } else {
            cli.exclude_dirs.clone()
        };

        let type_names = if cli.exclude_file_types.is_empty() {
            &config.exclude_file_types
        } else {
            &cli.exclude_file_types
        };
        let exclude_types = type_names
            .iter()
            .map(|name| name.parse::<FileType>())
            .collect::<Result<HashSet<_>, _>>()?;

        let group_names = if cli.group_by.is_empty() {
            &config.group_by
        } else {
            &cli.group_by
        };
        let grouping = if group_names.is_empty() {
            None
        } else {
            Some(GroupSpec::parse(group_names)?)
        };

        let mut options = DiscoveryOptions::new()
            .with_roots(roots)
            .with_exclude_dirs(exclude_dirs)
            .with_exclude_types(exclude_types);
        if let Some(depth) = cli.depth.or(config.depth) {
            options = options.with_depth(depth);
        }

        Ok(Self {
            options,
            grouping,
            format: cli.format.or(config.format).unwrap_or_default(),
            quiet: cli.quiet || config.quiet,
        })
    }
}
