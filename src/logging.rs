//! Logging initialisation.
//!
//! Diagnostics go to standard error through `tracing`, leaving standard output for the
//! report itself. The filter comes from the command line, not the environment.

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter for `level`, falling back to [`DEFAULT_LOG_LEVEL`] if it does not parse.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialize tracing for a binary. Safe to call more than once; later calls are ignored.
pub fn init_logging(level: &str) {
    let verbose = matches!(level.trim(), "debug" | "trace");

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_thread_ids(verbose)
        .try_init()
        .is_ok();

    if installed {
        debug!(level, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_build_filter_falls_back_on_bad_level() {
        assert_eq!(build_filter("info").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            build_filter("wordscan=loud").max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging("warn");
        init_logging("debug");
    }
}
