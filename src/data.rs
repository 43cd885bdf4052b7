//! Data structures for representing counted files.
//!
//! This module defines the core data structures used throughout the `wordscan` application
//! for representing the text files discovered during traversal and their word counts.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Represents a qualifying text file and its word count.
///
/// # Fields
/// * `path` - The full path to the file
/// * `word_count` - Number of words, or `None` if the file could not be opened or read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub word_count: Option<u64>,
}

impl FileRecord {
    /// Creates a record for a file that was read successfully.
    pub fn counted(path: PathBuf, words: u64) -> Self {
        Self {
            path,
            word_count: Some(words),
        }
    }

    /// Creates a record for a file that could not be read.
    pub fn unreadable(path: PathBuf) -> Self {
        Self {
            path,
            word_count: None,
        }
    }

    /// Word count contribution to totals. Unreadable files contribute 0.
    pub fn words(&self) -> u64 {
        self.word_count.unwrap_or(0)
    }

    pub fn is_unreadable(&self) -> bool {
        self.word_count.is_none()
    }
}

/// Selects whether the filtering and counting loops run on one thread or on the rayon pool.
///
/// # Variants
/// * `Sequential` - Single-threaded, results follow input order
/// * `Parallel` - Distributed across worker threads, result order is unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

impl ExecutionMode {
    /// Returns the short policy label printed in the startup banner.
    ///
    /// # Returns
    /// * `"SEQ"` for `ExecutionMode::Sequential`
    /// * `"PAR"` for `ExecutionMode::Parallel`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "SEQ",
            ExecutionMode::Parallel => "PAR",
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    /// Parses `1`/`0` style flags. Any non-zero integer selects parallel execution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "par" | "parallel" => return Ok(ExecutionMode::Parallel),
            "seq" | "sequential" => return Ok(ExecutionMode::Sequential),
            _ => {}
        }
        match s.parse::<i64>() {
            Ok(0) => Ok(ExecutionMode::Sequential),
            Ok(_) => Ok(ExecutionMode::Parallel),
            Err(_) => Err(format!(
                "invalid execution mode '{}': expected 1 (parallel) or 0 (sequential)",
                s
            )),
        }
    }
}

/// Summary of one counting run, derived from its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub records: Vec<FileRecord>,
    pub total_words: u64,
    pub unreadable: usize,
}

impl ScanReport {
    pub fn new(records: Vec<FileRecord>) -> Self {
        let total_words = records.iter().map(FileRecord::words).sum();
        let unreadable = records.iter().filter(|r| r.is_unreadable()).count();
        Self {
            records,
            total_words,
            unreadable,
        }
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }
}
