//! Checker registry and factory functions.

use std::collections::HashSet;

use crate::checkers::SyntaxChecker;
use crate::file_types::FileType;

/// Factory function type that creates checker instances.
pub type CheckerFactory = fn() -> Box<dyn SyntaxChecker>;

/// One registry entry as supplied by a provider: the file type, the
/// extensions it claims (lowercase, no leading dot), and the checker
/// factory.
pub type CheckerRegistration = (FileType, &'static [&'static str], CheckerFactory);

/// A provider of checker registrations.
///
/// Implement this trait to supply checkers from an external source (e.g. an
/// embedding application adding a custom format binding). The built-in
/// checkers are packaged as a `BuiltinProvider` (internal to the crate).
///
/// # Example
///
/// ```
/// use confcheck_core::{CheckerProvider, CheckerRegistration, CheckerRegistry};
///
/// struct MyProvider;
///
/// impl CheckerProvider for MyProvider {
///     fn checkers(&self) -> Vec<CheckerRegistration> {
///         // Return custom checker registrations here
///         vec![]
///     }
/// }
///
/// let registry = CheckerRegistry::builder()
///     .with_defaults()
///     .with_provider(&MyProvider)
///     .build();
/// ```
pub trait CheckerProvider: Send + Sync {
    /// Human-readable name for this provider.
    ///
    /// Defaults to the unqualified struct name (e.g. `"BuiltinProvider"`).
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Return the checker registrations supplied by this provider.
    fn checkers(&self) -> Vec<CheckerRegistration>;
}

/// The built-in checker provider shipping with confcheck-core.
///
/// Covers all six supported formats. Used internally by
/// [`CheckerRegistry::with_defaults`] and
/// [`CheckerRegistryBuilder::with_defaults`].
pub(crate) struct BuiltinProvider;

impl CheckerProvider for BuiltinProvider {
    fn checkers(&self) -> Vec<CheckerRegistration> {
        DEFAULTS.to_vec()
    }
}

struct RegistryEntry {
    file_type: FileType,
    extensions: Vec<String>,
    factory: CheckerFactory,
}

/// Registry that maps file extensions to [`FileType`] values and file types
/// to checker factories.
///
/// This is the extension point of the engine: the discoverer asks it which
/// types claim a given extension, and the dispatcher asks it for a checker
/// per type. Entries are ordered; when a custom registration makes an
/// extension ambiguous, [`types_for_extension`](CheckerRegistry::types_for_extension)
/// reports every claiming type in registration order.
///
/// Most callers should use [`CheckerRegistry::with_defaults`]. For custom
/// providers or removing a built-in format, use
/// [`CheckerRegistry::builder`].
pub struct CheckerRegistry {
    entries: Vec<RegistryEntry>,
}

impl CheckerRegistry {
    /// Create an empty registry with no registered checkers.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a registry pre-populated with the built-in checkers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for &(file_type, extensions, factory) in DEFAULTS {
            registry.register(file_type, extensions, factory);
        }
        registry
    }

    /// Create a [`CheckerRegistryBuilder`] for ergonomic construction.
    ///
    /// # Example
    ///
    /// ```
    /// use confcheck_core::{CheckerRegistry, FileType};
    ///
    /// let registry = CheckerRegistry::builder()
    ///     .with_defaults()
    ///     .without_type(FileType::Csv)
    ///     .build();
    /// ```
    pub fn builder() -> CheckerRegistryBuilder {
        CheckerRegistryBuilder::new()
    }

    /// Register a checker factory for a file type and its extension set.
    ///
    /// Extensions are stored lowercase without the leading dot; lookups
    /// compare against the lowercased extension of the candidate file.
    pub fn register(&mut self, file_type: FileType, extensions: &[&str], factory: CheckerFactory) {
        self.entries.push(RegistryEntry {
            file_type,
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            factory,
        });
    }

    /// Return every file type claiming the given extension, in registration
    /// order. A type registered more than once is reported once.
    ///
    /// The extension is expected without its leading dot; matching is
    /// case-insensitive.
    pub fn types_for_extension(&self, extension: &str) -> Vec<FileType> {
        let wanted = extension.to_ascii_lowercase();
        let mut types = Vec::new();
        for entry in &self.entries {
            if entry.extensions.iter().any(|e| *e == wanted) && !types.contains(&entry.file_type) {
                types.push(entry.file_type);
            }
        }
        types
    }

    /// Build a fresh checker instance for the given file type.
    ///
    /// When a type carries several registrations, the earliest one wins.
    pub fn checker_for(&self, file_type: FileType) -> Option<Box<dyn SyntaxChecker>> {
        self.entries
            .iter()
            .find(|entry| entry.file_type == file_type)
            .map(|entry| (entry.factory)())
    }

    /// Return the distinct registered file types, in registration order.
    pub fn registered_types(&self) -> Vec<FileType> {
        let mut types = Vec::new();
        for entry in &self.entries {
            if !types.contains(&entry.file_type) {
                types.push(entry.file_type);
            }
        }
        types
    }

    /// Return the total number of registered checker entries.
    pub fn total_checker_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Builder for constructing a [`CheckerRegistry`] with fine-grained control.
///
/// Supports adding the built-in checkers, custom [`CheckerProvider`]
/// implementations, individual registrations, and removing whole file types.
///
/// # Example
///
/// ```
/// use confcheck_core::{CheckerRegistry, FileType};
///
/// let registry = CheckerRegistry::builder()
///     .with_defaults()
///     .without_type(FileType::Xml)
///     .without_type(FileType::Ini)
///     .build();
///
/// assert!(registry.checker_for(FileType::Xml).is_none());
/// ```
pub struct CheckerRegistryBuilder {
    entries: Vec<(FileType, Vec<String>, CheckerFactory)>,
    removed_types: HashSet<FileType>,
}

impl CheckerRegistryBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            removed_types: HashSet::new(),
        }
    }

    /// Add all built-in checkers (equivalent to [`CheckerRegistry::with_defaults`]).
    ///
    /// This method is additive: calling it multiple times will register
    /// duplicate entries. For most use cases, call it once.
    pub fn with_defaults(&mut self) -> &mut Self {
        self.with_provider(&BuiltinProvider)
    }

    /// Add all registrations from a [`CheckerProvider`].
    pub fn with_provider(&mut self, provider: &dyn CheckerProvider) -> &mut Self {
        for (file_type, extensions, factory) in provider.checkers() {
            self.register(file_type, extensions, factory);
        }
        self
    }

    /// Register a single checker factory for a file type.
    pub fn register(
        &mut self,
        file_type: FileType,
        extensions: &[&str],
        factory: CheckerFactory,
    ) -> &mut Self {
        self.entries.push((
            file_type,
            extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            factory,
        ));
        self
    }

    /// Mark a file type as removed (excluded from the built registry).
    ///
    /// Removal applies to every registration for the type, including ones
    /// added by providers. This is a registry-level removal; per-run
    /// skipping belongs in
    /// [`DiscoveryOptions`](crate::DiscoveryOptions) instead.
    pub fn without_type(&mut self, file_type: FileType) -> &mut Self {
        self.removed_types.insert(file_type);
        self
    }

    /// Produce a [`CheckerRegistry`] from this builder.
    ///
    /// Drains the builder's removed set via [`std::mem::take`], so calling
    /// `build()` a second time produces a registry with no removed types.
    /// Reuse a builder by calling configuration methods again before a
    /// subsequent `build()`.
    pub fn build(&mut self) -> CheckerRegistry {
        let removed = std::mem::take(&mut self.removed_types);
        let mut registry = CheckerRegistry::new();
        for (file_type, extensions, factory) in &self.entries {
            if removed.contains(file_type) {
                continue;
            }
            let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
            registry.register(*file_type, &extensions, *factory);
        }
        registry
    }
}

// ============================================================================
// Built-in defaults
// ============================================================================

const DEFAULTS: &[CheckerRegistration] = &[
    (FileType::Json, &["json"], json_checker),
    (FileType::Yaml, &["yml", "yaml"], yaml_checker),
    (FileType::Toml, &["toml"], toml_checker),
    (FileType::Xml, &["xml"], xml_checker),
    (FileType::Ini, &["ini"], ini_checker),
    (FileType::Csv, &["csv"], csv_checker),
];

// ============================================================================
// Factory functions
// ============================================================================

fn json_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::json::JsonChecker)
}

fn yaml_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::yaml::YamlChecker)
}

fn toml_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::toml::TomlChecker)
}

fn xml_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::xml::XmlChecker)
}

fn ini_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::ini::IniChecker)
}

fn csv_checker() -> Box<dyn SyntaxChecker> {
    Box::new(crate::checkers::csv::CsvChecker)
}
