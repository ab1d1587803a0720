//! File discovery: walking search roots and classifying candidates.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use ignore::WalkBuilder;

use crate::errors::CheckError;
use crate::file_types::FileType;
use crate::registry::CheckerRegistry;

/// A file found during discovery, bound to one claiming file type.
///
/// When a custom registration makes an extension ambiguous, the same path
/// appears once per claiming type (see
/// [`FileDiscoverer::discover`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Base name including the extension (e.g. `"app.json"`).
    pub name: String,
    /// Path as found under the supplied root, not canonicalized.
    pub path: PathBuf,
    pub file_type: FileType,
}

/// Traversal options for one run. Immutable once discovery starts.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Search roots, walked in order. Defaults to the current directory.
    pub roots: Vec<PathBuf>,
    /// Directory base names pruned wherever they appear.
    pub exclude_dirs: HashSet<String>,
    /// File types skipped entirely during discovery.
    pub exclude_types: HashSet<FileType>,
    /// Recursion limit in directory levels below each root. `None` means
    /// unlimited; `Some(0)` stops at the root's own files. The unset state
    /// is distinct from zero.
    pub depth: Option<usize>,
}

impl DiscoveryOptions {
    pub fn new() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            exclude_dirs: HashSet::new(),
            exclude_types: HashSet::new(),
            depth: None,
        }
    }

    /// Replace the search roots (builder pattern).
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the excluded directory names (builder pattern).
    pub fn with_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the excluded file types (builder pattern).
    pub fn with_exclude_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = FileType>,
    {
        self.exclude_types = types.into_iter().collect();
        self
    }

    /// Set the recursion depth limit (builder pattern).
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one discovery pass: the classified files plus every
/// configured root that did not exist. Missing roots do not stop the walk
/// of the remaining roots; they are collected so all of them can be
/// reported together.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub files: Vec<DiscoveredFile>,
    pub missing_roots: Vec<PathBuf>,
}

impl Discovery {
    /// Materialize the combined error naming every missing root, if any.
    pub fn root_error(&self) -> Option<CheckError> {
        if self.missing_roots.is_empty() {
            None
        } else {
            Some(CheckError::RootNotFound {
                roots: self.missing_roots.clone(),
            })
        }
    }
}

/// Walks search roots and yields one [`DiscoveredFile`] per (path, claiming
/// type) pair. The registry is threaded in explicitly; there is no global
/// state.
pub struct FileDiscoverer<'a> {
    registry: &'a CheckerRegistry,
}

impl<'a> FileDiscoverer<'a> {
    pub fn new(registry: &'a CheckerRegistry) -> Self {
        Self { registry }
    }

    /// Discover candidate files under every root in `options`.
    ///
    /// - A root that does not exist is recorded in
    ///   [`Discovery::missing_roots`]; remaining roots are still walked.
    /// - Directories whose base name is in the excluded set are pruned at
    ///   any nesting level. The root itself is never pruned.
    /// - All ignore-file and hidden-entry filtering is off: a syntax
    ///   checker has to see every file under its roots.
    /// - Files are matched by lowercased extension; a file claiming several
    ///   registered types yields one entry per type, in registration order.
    /// - No file content is read here; classification is by name only.
    ///
    /// The returned files are sorted by path. The sort is stable, so
    /// same-path entries from an extension collision keep their
    /// registration order.
    pub fn discover(&self, options: &DiscoveryOptions) -> Discovery {
        let mut files = Vec::new();
        let mut missing_roots = Vec::new();
        let exclude_dirs = Arc::new(options.exclude_dirs.clone());

        for root in &options.roots {
            if !root.exists() {
                missing_roots.push(root.clone());
                continue;
            }

            let mut builder = WalkBuilder::new(root);
            builder
                .standard_filters(false)
                .max_depth(options.depth.map(|limit| limit.saturating_add(1)));
            builder.filter_entry({
                let exclude_dirs = Arc::clone(&exclude_dirs);
                move |entry| {
                    if entry.depth() == 0 {
                        return true;
                    }
                    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        let name = entry.file_name().to_string_lossy();
                        return !exclude_dirs.contains(name.as_ref());
                    }
                    true
                }
            });

            for entry in builder.build().filter_map(|entry| entry.ok()) {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                let extension = extension.to_ascii_lowercase();
                for file_type in self.registry.types_for_extension(&extension) {
                    if options.exclude_types.contains(&file_type) {
                        continue;
                    }
                    files.push(DiscoveredFile {
                        name: path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                        path: path.to_path_buf(),
                        file_type,
                    });
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));

        Discovery {
            files,
            missing_roots,
        }
    }
}
