//! Utility functions for the `wordscan` tool.
//!
//! This module provides:
//! - Extension normalisation and matching
//! - Glob-based exclusion pattern parsing
//! - Sorting of counted records

use crate::cli::SortKey;
use crate::data::FileRecord;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::path::Path;

/// Strips surrounding whitespace and a single leading dot, so `.txt` and `txt` are equivalent.
pub fn normalize_extension(ext: &str) -> &str {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Returns true when the final extension of `path` equals `ext` (case-sensitive).
///
/// An empty `ext` matches paths without any extension.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let ext = normalize_extension(ext);
    match path.extension() {
        Some(actual) => !ext.is_empty() && actual == OsStr::new(ext),
        None => ext.is_empty(),
    }
}

/// Sorts records based on the provided sort key.
///
/// # Behavior
/// * `SortKey::Name` - Sorts by path in ascending order
/// * `SortKey::Words` - Sorts by word count in descending order, unreadable files last,
///   ties broken by path
pub fn sort_records(records: &mut [FileRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::Name => records.sort_by(|a, b| a.path.cmp(&b.path)),
        SortKey::Words => records.sort_by(|a, b| {
            b.word_count
                .cmp(&a.word_count)
                .then_with(|| a.path.cmp(&b.path))
        }),
    }
}

/// Expands exclude patterns into common glob forms:
/// For example, "node_modules" (or ".git") becomes:
///   - `**/node_modules`
///   - `**/node_modules/**`
///     unless the pattern already includes glob symbols or a path separator.
pub fn expand_exclude_patterns(patterns: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();

    for pat in patterns {
        let pat = pat.trim();
        if pat.is_empty() {
            continue;
        }
        if pat.contains(['*', '?', '[', '{']) || pat.contains('/') {
            expanded.push(pat.to_string());
        } else {
            expanded.push(format!("**/{}", pat));
            expanded.push(format!("**/{}/**", pat));
        }
    }

    expanded
}

/// Compiles a list of glob patterns into a `GlobSet` matcher,
/// which can be used to test paths efficiently.
pub fn build_exclude_matcher(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build glob set")
}
