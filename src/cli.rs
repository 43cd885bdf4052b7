//! CLI interface definitions for the `wordscan` and `wordcount` binaries.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: arguments of the directory scanner (`wordscan`)
//! - [`WordCountArgs`]: arguments of the in-memory counter (`wordcount`)
//! - [`SortKey`]: an enum for sorting the listing by `name` or `words`
//!
//! # Example
//!
//! ```bash
//! wordscan ~/notes 1 list --exclude archive --sort words
//! ```

use crate::data::ExecutionMode;
use crate::logging::DEFAULT_LOG_LEVEL;
use crate::scan::DEFAULT_EXTENSION;
use crate::thread_pool::ThreadPoolStrategy;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `wordscan` directory word counter.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use wordscan::Args;
/// use wordscan::data::ExecutionMode;
///
/// let args = Args::parse_from(["wordscan", "/tmp", "1", "list"]);
/// assert_eq!(args.mode, ExecutionMode::Parallel);
/// assert!(args.list_enabled());
/// ```
#[derive(Parser, Debug)]
#[command(name = "wordscan", author = "Sam Green", version, about)]
pub struct Args {
    /// Root directory to scan
    pub path: PathBuf,

    /// Execution mode: 1 = parallel, 0 = sequential
    #[arg(value_name = "PARALLEL:1|0", allow_negative_numbers = true)]
    pub mode: ExecutionMode,

    /// Any non-empty value lists every file with its word count
    #[arg(value_name = "LIST")]
    pub list: Option<String>,

    /// Extension of the files to count
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Exclude entries with matching names or globs (e.g., '.git', 'node_modules')
    #[arg(long, value_name = "PATTERN", num_args = 1.., action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Sort the file listing by name or word count
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Limit the number of CPU threads used (default: use all available)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Thread pool strategy (hidden experimental flag)
    #[arg(long = "threads-strategy", value_enum, default_value_t = ThreadPoolStrategy::Default, hide = true)]
    pub threads_strategy: ThreadPoolStrategy,

    /// Show memory peak, total time and scan facts after the phase timings
    #[arg(long, default_value_t = false)]
    pub profile: bool,

    /// Hide the progress spinner
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Log filter for diagnostics on stderr (e.g. "info", "wordscan=debug")
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Args {
    /// True when the optional third positional is present and non-empty.
    pub fn list_enabled(&self) -> bool {
        self.list.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Command-line arguments for the `wordcount` in-memory word counter.
#[derive(Parser, Debug)]
#[command(name = "wordcount", author = "Sam Green", version, about)]
pub struct WordCountArgs {
    /// File to load and count, or "-" for standard input (unused with --text)
    pub input: String,

    /// Execution mode: 1 = parallel, 0 = sequential
    #[arg(value_name = "PARALLEL:1|0", allow_negative_numbers = true)]
    pub mode: ExecutionMode,

    /// Count this text instead of reading the input
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Log filter for diagnostics on stderr
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Enum for specifying how to sort the listing.
///
/// # Variants
/// * `Name` - Sort records alphabetically by path
/// * `Words` - Sort records by word count in descending order
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum SortKey {
    Name,
    Words,
}

/// True when a parse error stems from missing positionals, which gets the short usage line.
pub fn is_missing_arguments(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let args = Args::parse_from(["wordscan", "/data", "0"]);
        assert_eq!(args.path, PathBuf::from("/data"));
        assert_eq!(args.mode, ExecutionMode::Sequential);
        assert!(!args.list_enabled());
        assert_eq!(args.ext, "txt");
        assert_eq!(args.log_level, "warn");
        assert_eq!(args.sort, None);
    }

    #[test]
    fn test_empty_list_argument_is_disabled() {
        let args = Args::parse_from(["wordscan", "/data", "1", ""]);
        assert_eq!(args.mode, ExecutionMode::Parallel);
        assert!(!args.list_enabled());
    }

    #[test]
    fn test_negative_mode_is_parallel() {
        let args = Args::parse_from(["wordscan", "/data", "-1"]);
        assert_eq!(args.mode, ExecutionMode::Parallel);

        let args = WordCountArgs::parse_from(["wordcount", "unused", "-3"]);
        assert_eq!(args.mode, ExecutionMode::Parallel);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "wordscan",
            "/data",
            "1",
            "--ext",
            ".md",
            "--exclude",
            "target",
            ".git",
            "--sort",
            "words",
            "--threads",
            "2",
        ]);
        assert_eq!(args.ext, ".md");
        assert_eq!(args.exclude, vec!["target", ".git"]);
        assert_eq!(args.sort, Some(SortKey::Words));
        assert_eq!(args.threads, Some(2));
    }

    #[test]
    fn test_missing_arguments_detected() {
        let err = Args::try_parse_from(["wordscan", "/data"]).unwrap_err();
        assert!(is_missing_arguments(&err));

        let err = Args::try_parse_from(["wordscan", "/data", "fast"]).unwrap_err();
        assert!(!is_missing_arguments(&err));
    }

    #[test]
    fn test_wordcount_args() {
        let args = WordCountArgs::parse_from(["wordcount", "unused", "1", "--text", "a b"]);
        assert_eq!(args.mode, ExecutionMode::Parallel);
        assert_eq!(args.text.as_deref(), Some("a b"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
        WordCountArgs::command().debug_assert();
    }
}
