//! File system scanning module for `wordscan`.
//!
//! This module handles:
//! - Recursive directory traversal using `WalkDir`
//! - Filtering via glob-based exclude rules, matched relative to the scan root
//! - Selecting target files by extension, sequentially or in parallel with `rayon`
//! - Progress spinner via `indicatif`
//!
//! [`scan`] returns every entry under the root as a typed `Result`. The pipeline entry
//! point, [`gather_target_files`], turns a failed scan into an empty file list and an
//! error log so the caller can still report zero files.
//!
//! Parallel filtering collects matches into per-worker buffers that rayon concatenates
//! at the end. There is no shared output vector and no lock.

use crate::data::ExecutionMode;
use crate::error::ScanError;
use crate::metrics::{PhaseTimer, ProfileData};
use crate::utils::has_extension;
use globset::GlobSet;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Options controlling traversal and target selection.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extension of target files, with or without the leading dot
    pub extension: String,
    /// Matcher for paths to prune from the walk
    pub exclude: GlobSet,
    /// Show a spinner while walking
    pub show_progress: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: GlobSet::empty(),
            show_progress: false,
        }
    }
}

/// Recursively enumerates every entry reachable from `root`, the root included.
///
/// # Errors
/// Returns an error if `root` does not exist, is not a directory or cannot be read.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    scan_with(root, &ScanOptions::default())
}

/// Like [`scan`], pruning entries that match `opts.exclude`.
///
/// Entries below the root that cannot be read are skipped with a warning.
/// Symbolic links are listed but not followed.
pub fn scan_with(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    check_root(root)?;

    let pb = spinner(opts.show_progress);
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_excluded(root, e.path(), &opts.exclude));

    for entry in walker {
        pb.tick();
        match entry {
            Ok(entry) => paths.push(entry.into_path()),
            Err(err) if err.depth() == 0 => {
                pb.finish_and_clear();
                return Err(ScanError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => warn!("skipping unreadable entry: {err}"),
        }
    }

    pb.finish_and_clear();
    Ok(paths)
}

/// Patterns are matched against the path relative to `root`; the root itself is never excluded.
fn is_excluded(root: &Path, path: &Path, exclude: &GlobSet) -> bool {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => exclude.is_match(rel),
        _ => false,
    }
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScanError::NotFound {
            path: root.to_path_buf(),
        },
        _ => ScanError::Io {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} Scanning files... [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Returns true for regular files (symlinks followed) carrying extension `ext`.
pub fn is_target_file(path: &Path, ext: &str) -> bool {
    has_extension(path, ext) && path.is_file()
}

/// Keeps the target files among `paths`.
///
/// `Sequential` preserves the input order. `Parallel` evaluates the predicate concurrently
/// and makes no ordering promise.
pub fn filter_target_files(paths: &[PathBuf], ext: &str, mode: ExecutionMode) -> Vec<PathBuf> {
    match mode {
        ExecutionMode::Sequential => paths
            .iter()
            .filter(|p| is_target_file(p, ext))
            .cloned()
            .collect(),
        ExecutionMode::Parallel => paths
            .par_iter()
            .filter(|p| is_target_file(p, ext))
            .cloned()
            .collect(),
    }
}

/// Scans `root` and returns its target files, timing each phase into `profile`.
///
/// A failed scan is logged and yields an empty list.
pub fn gather_target_files(
    root: &Path,
    opts: &ScanOptions,
    mode: ExecutionMode,
    profile: &mut ProfileData,
) -> Vec<PathBuf> {
    let timer = PhaseTimer::new("gathering all the paths");
    let scanned = scan_with(root, opts);
    profile.add_phase(timer.finish());

    let all = match scanned {
        Ok(all) => all,
        Err(err) => {
            error!("{err}");
            return Vec::new();
        }
    };
    debug!(entries = all.len(), root = %root.display(), "walk complete");
    profile.add_metadata("entries scanned", &all.len().to_string());

    let title = match mode {
        ExecutionMode::Sequential => "filtering target files sequential",
        ExecutionMode::Parallel => "filtering target files parallel",
    };
    let timer = PhaseTimer::new(title);
    let files = filter_target_files(&all, &opts.extension, mode);
    profile.add_phase(timer.finish());

    files
}
