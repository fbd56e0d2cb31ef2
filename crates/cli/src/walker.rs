// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Target resolution with gitignore support.
//!
//! Expands positional arguments (files, directories, glob patterns) into
//! a sorted, de-duplicated file list. Directories are walked with the
//! `ignore` crate so `.gitignore` is respected; exclude globs are applied
//! to every candidate, explicit files included.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::Serialize;

use crate::error::{Error, Result};

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Path an ignore error refers to (outermost), and its underlying cause.
fn error_parts(err: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => (Some(path.as_path()), error_parts(err).1),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_parts(err)
        }
        _ => (None, err),
    }
}

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
/// These are filtered during traversal, not after discovery.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Characters that turn a non-existent argument into a glob pattern.
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Exclude globs, matched against each candidate and its parents.
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_patterns: Vec::new(),
            git_ignore: true,
            hidden: true,
        }
    }
}

/// Statistics from a resolve operation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// Files kept after exclusion.
    pub files_found: usize,

    /// Files dropped by an exclude glob.
    pub files_excluded: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// An entry the walk could not read (e.g. a directory without permission).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkError {
    pub path: PathBuf,
    pub message: String,
}

impl WalkError {
    fn new(err: &ignore::Error, root: &Path, cwd: &Path) -> Self {
        let (path, cause) = error_parts(err);
        let path = path.map_or_else(
            || root.to_path_buf(),
            |path| as_spelled(path.to_path_buf(), root, cwd),
        );
        // walkdir's I/O errors repeat the absolute path; the kind is enough.
        let cause = match cause {
            ignore::Error::Io(io) => io.kind().to_string(),
            other => other.to_string(),
        };
        Self {
            message: format!("{}: {}", path.display(), cause),
            path,
        }
    }
}

/// Result of resolving the positional targets.
#[derive(Debug, Default)]
pub struct ResolvedTargets {
    /// Sorted, de-duplicated files to check.
    pub files: Vec<PathBuf>,

    /// Arguments that name neither a path nor a glob.
    pub missing: Vec<PathBuf>,

    /// Entries skipped because they could not be read.
    pub errors: Vec<WalkError>,

    pub stats: WalkStats,
}

/// Sequential file walker with gitignore support.
pub struct FileWalker {
    config: WalkerConfig,
    exclude: GlobSet,
}

impl FileWalker {
    /// Create a new walker. Fails on an invalid exclude glob.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude_patterns {
            builder.add(compile_glob(pattern)?);
        }
        let exclude = builder
            .build()
            .map_err(|e| Error::config(format!("invalid exclude patterns: {e}")))?;
        Ok(Self { config, exclude })
    }

    /// Resolve `targets` relative to `cwd`.
    pub fn resolve(&self, targets: &[PathBuf], cwd: &Path) -> Result<ResolvedTargets> {
        let mut files = BTreeSet::new();
        let mut missing = Vec::new();
        let mut stats = WalkStats::default();
        let mut errors = Vec::new();
        let mut cwd_files: Option<Vec<PathBuf>> = None;

        for target in targets {
            let on_disk = cwd.join(target);
            if on_disk.is_file() {
                self.keep(target.clone(), cwd, &mut files, &mut stats);
            } else if on_disk.is_dir() {
                for path in self.walk_dir(target, cwd, &mut stats, &mut errors) {
                    self.keep(path, cwd, &mut files, &mut stats);
                }
            } else if let Some(pattern) = target.to_str().filter(|t| t.contains(GLOB_META)) {
                let glob = compile_glob(pattern.trim_start_matches("./"))?.compile_matcher();
                let candidates = cwd_files.get_or_insert_with(|| {
                    self.walk_dir(Path::new("."), cwd, &mut stats, &mut errors)
                });
                let matched: Vec<PathBuf> = candidates
                    .iter()
                    .filter(|path| glob.is_match(normalize(path)))
                    .cloned()
                    .collect();
                tracing::debug!("glob {} matched {} files", pattern, matched.len());
                for path in matched {
                    self.keep(path, cwd, &mut files, &mut stats);
                }
            } else {
                missing.push(target.clone());
            }
        }

        stats.files_found = files.len();
        Ok(ResolvedTargets {
            files: files.into_iter().collect(),
            missing,
            errors,
            stats,
        })
    }

    fn keep(
        &self,
        path: PathBuf,
        cwd: &Path,
        files: &mut BTreeSet<PathBuf>,
        stats: &mut WalkStats,
    ) {
        if self.is_excluded(&path, cwd) {
            tracing::debug!("excluded {}", path.display());
            stats.files_excluded += 1;
            return;
        }
        files.insert(normalize(&path).to_path_buf());
    }

    /// Whether `path` (or one of its parent directories) matches an exclude glob.
    pub fn is_excluded(&self, path: &Path, cwd: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(cwd).unwrap_or(path);
        [normalize(path), normalize(relative)]
            .into_iter()
            .any(|candidate| candidate.ancestors().any(|p| self.exclude.is_match(p)))
    }

    /// Walk `root` (relative to `cwd`), returning files in walk order.
    fn walk_dir(
        &self,
        root: &Path,
        cwd: &Path,
        stats: &mut WalkStats,
        errors: &mut Vec<WalkError>,
    ) -> Vec<PathBuf> {
        let mut builder = WalkBuilder::new(cwd.join(root));
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(true)
            .git_global(true)
            .follow_links(false)
            .max_depth(self.config.max_depth);

        // Filter out common skip directories at the walker level.
        builder.filter_entry(|entry| {
            !entry.file_type().is_some_and(|t| t.is_dir())
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

        let mut out = Vec::new();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    out.push(as_spelled(entry.into_path(), root, cwd));
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Walk error: {}", err);
                        stats.errors += 1;
                        errors.push(WalkError::new(&err, root, cwd));
                    }
                }
            }
        }
        out
    }
}

/// Report walked paths the way the user spelled the root.
fn as_spelled(path: PathBuf, root: &Path, cwd: &Path) -> PathBuf {
    match path.strip_prefix(cwd) {
        Ok(relative) if root.is_relative() => relative.to_path_buf(),
        _ => path,
    }
}

/// Compile a user glob; `*` does not cross `/`, `**` does.
fn compile_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::config(format!("invalid glob `{pattern}`: {e}")))
}

/// Drop leading `./` components.
fn normalize(path: &Path) -> &Path {
    let mut components = path.components();
    while components.clone().next() == Some(Component::CurDir) {
        components.next();
    }
    components.as_path()
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
