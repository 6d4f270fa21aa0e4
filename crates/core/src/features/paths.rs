//! Filesystem listing behind path completions in component options.

use crate::error::{Result, StencilError};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use std::path::Path;

/// Globs for style sheets a component may reference.
pub const STYLE_PATTERNS: &[&str] = &[
    "*.css",
    "*.scss",
    "*.sass",
    "*.styl",
    "*.stylus",
    "*.pcss",
    "!*.vars.*",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub name: String,
    pub is_dir: bool,
}

pub trait PathCompleter: Send + Sync {
    /// Entries directly inside `base`: matching files first (when
    /// `include_files`), then directories (when `include_dirs`).
    fn list_candidates(
        &self,
        base: &Path,
        patterns: &[&str],
        include_files: bool,
        include_dirs: bool,
    ) -> Result<Vec<PathEntry>>;
}

/// Lists a single directory level from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPathCompleter;

impl PathCompleter for FsPathCompleter {
    fn list_candidates(
        &self,
        base: &Path,
        patterns: &[&str],
        include_files: bool,
        include_dirs: bool,
    ) -> Result<Vec<PathEntry>> {
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut builder = OverrideBuilder::new(base);
        for pattern in patterns {
            builder
                .add(pattern)
                .map_err(|e| StencilError::Glob(e.to_string()))?;
        }
        let globs = builder
            .build()
            .map_err(|e| StencilError::Glob(e.to_string()))?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let walker = WalkBuilder::new(base)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker.filter_map(|e| e.ok()) {
            if entry.depth() == 0 {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir {
                if include_dirs {
                    dirs.push(PathEntry { name, is_dir });
                }
            } else if include_files && (patterns.is_empty() || globs.matched(entry.path(), false).is_whitelist()) {
                files.push(PathEntry { name, is_dir });
            }
        }

        files.extend(dirs);
        Ok(files)
    }
}
