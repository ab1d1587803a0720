//! Recognized configuration file formats

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CheckError;

/// Identifier of a configuration format with a built-in syntax checker.
///
/// The identifier names the format, not an extension: both `.yml` and
/// `.yaml` files carry [`FileType::Yaml`]. Extension sets live in the
/// [`CheckerRegistry`](crate::CheckerRegistry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Json,
    Yaml,
    Toml,
    Xml,
    Ini,
    Csv,
}

impl FileType {
    /// Every supported file type, in registration order.
    pub const ALL: [FileType; 6] = [
        FileType::Json,
        FileType::Yaml,
        FileType::Toml,
        FileType::Xml,
        FileType::Ini,
        FileType::Csv,
    ];

    /// Canonical lowercase identifier (e.g. `"yaml"`).
    pub fn identifier(&self) -> &'static str {
        match self {
            FileType::Json => "json",
            FileType::Yaml => "yaml",
            FileType::Toml => "toml",
            FileType::Xml => "xml",
            FileType::Ini => "ini",
            FileType::Csv => "csv",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for FileType {
    type Err = CheckError;

    /// Parse a file-type identifier. Matching is case-insensitive and
    /// ignores surrounding whitespace; extensions are not accepted
    /// (`"yml"` is an extension of the `yaml` type, not a type name).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        FileType::ALL
            .iter()
            .copied()
            .find(|t| t.identifier() == normalized)
            .ok_or(CheckError::UnknownFileType {
                name: s.trim().to_string(),
            })
    }
}
