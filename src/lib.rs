//! Library crate for wordscan
//!
//! This exposes the modules used by the `wordscan` and `wordcount` binaries and their tests.
//!
//! # Features
//!
//! - **Directory Scanning**: Recursive traversal with glob exclusion and extension filtering
//! - **Word Counting**: Per-file counting and a string kernel, sequential or parallel
//! - **Measurement**: Phase timers and profile summaries written to any writer
//! - **Output**: Plain terminal report with an optional per-file listing
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`FileRecord`, `ExecutionMode`, `ScanReport`)
//! - [`cli`]: Command-line interface definitions
//! - [`scan`]: Directory traversal and target file selection
//! - [`counter`]: Per-file word counting
//! - [`words`]: String word-count kernel
//! - [`metrics`]: Timing and profiling
//! - [`output`]: Terminal renderer
//! - [`thread_pool`]: Rayon pool configuration
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Typed scan and open errors
//! - [`utils`]: Extension matching, exclude patterns and sorting

pub mod cli;
pub mod counter;
pub mod data;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod scan;
pub mod thread_pool;
pub mod utils;
pub mod words;

pub use cli::{Args, WordCountArgs};
pub use data::{ExecutionMode, FileRecord, ScanReport};
pub use error::{OpenError, ScanError};
