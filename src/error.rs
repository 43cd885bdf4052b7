//! Typed errors for scanning and counting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to traverse the scan root.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("scan root '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read scan root '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot stat scan root '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to open or read a file at count time.
#[derive(Debug, Error)]
#[error("failed to read file '{}': {source}", .path.display())]
pub struct OpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = ScanError::NotFound {
            path: PathBuf::from("/nonexistent"),
        };
        assert_eq!(err.to_string(), "scan root '/nonexistent' does not exist");

        let err = OpenError {
            path: PathBuf::from("/locked.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("failed to read file '/locked.txt'"));
    }
}
