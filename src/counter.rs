//! Per-file word counting.
//!
//! [`count_words_in_file`] reads one file and counts its whitespace-delimited words.
//! [`count_all`] maps a list of paths to [`FileRecord`]s, either in input order on the
//! current thread or fanned out over the rayon pool. In parallel mode every path owns its
//! output slot in the collected vector, so no lock is taken.
//!
//! A file that cannot be opened is not treated as empty: it is logged and reported with
//! an unreadable marker (`word_count: None`).

use crate::data::{ExecutionMode, FileRecord};
use crate::error::OpenError;
use crate::words::word_count_bytes;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Counts the words in the file at `path`.
///
/// Bytes are classified directly, so content that is not valid UTF-8 still counts.
///
/// # Errors
/// Returns [`OpenError`] if the file cannot be opened or read.
pub fn count_words_in_file(path: &Path) -> Result<u64, OpenError> {
    let bytes = fs::read(path).map_err(|source| OpenError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count_words(&bytes))
}

/// Counts maximal runs of non-whitespace bytes, using the same kernel as [`word_count_bytes`].
pub fn count_words(bytes: &[u8]) -> u64 {
    word_count_bytes(bytes, ExecutionMode::Sequential)
}

fn count_one(path: &Path) -> FileRecord {
    match count_words_in_file(path) {
        Ok(words) => {
            trace!(path = %path.display(), words, "counted file");
            FileRecord::counted(path.to_path_buf(), words)
        }
        Err(err) => {
            warn!("{err}");
            FileRecord::unreadable(path.to_path_buf())
        }
    }
}

/// Counts every path and returns one record per path.
///
/// # Arguments
/// * `paths` - Files to count
/// * `mode` - `Sequential` processes strictly in order; `Parallel` counts each path
///   independently on the rayon pool
///
/// # Returns
/// * `Vec<FileRecord>` - One record per input path. Unreadable files carry `None`.
pub fn count_all(paths: &[PathBuf], mode: ExecutionMode) -> Vec<FileRecord> {
    match mode {
        ExecutionMode::Sequential => paths.iter().map(|p| count_one(p)).collect(),
        ExecutionMode::Parallel => paths.par_iter().map(|p| count_one(p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_words_in_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "one two three").expect("Failed to write file");

        assert_eq!(count_words_in_file(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_words_handles_invalid_utf8() {
        assert_eq!(count_words(b"caf\xe9 au lait"), 3);
        assert_eq!(count_words(b"\xff\xfe"), 1);
        assert_eq!(count_words(b""), 0);
        assert_eq!(count_words(b"\n\n\t "), 0);
        assert_eq!(count_words("caf\u{a0}au\u{2003}lait".as_bytes()), 1);
        assert_eq!(count_words(b"one\x0btwo\x0cthree"), 3);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.txt");

        let err = count_words_in_file(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_count_all_marks_unreadable_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let empty = temp_dir.path().join("empty.txt");
        let missing = temp_dir.path().join("missing.txt");
        fs::write(&empty, "").expect("Failed to write file");

        let paths = vec![empty.clone(), missing.clone()];
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let records = count_all(&paths, mode);
            assert_eq!(
                records,
                vec![FileRecord::counted(empty.clone(), 0), FileRecord::unreadable(missing.clone())]
            );
        }
    }

    #[test]
    fn test_count_all_preserves_input_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths: Vec<PathBuf> = (0..32)
            .map(|i| {
                let path = temp_dir.path().join(format!("file_{i}.txt"));
                fs::write(&path, "word ".repeat(i)).expect("Failed to write file");
                path
            })
            .collect();

        let records = count_all(&paths, ExecutionMode::Parallel);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.path, paths[i]);
            assert_eq!(record.word_count, Some(i as u64));
        }
    }
}
