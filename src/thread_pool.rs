//! Thread pool configuration for the parallel execution mode.
//!
//! # Strategies
//! - `Default`: Uses Rayon's default thread pool configuration
//! - `Fixed`: Uses a fixed number of threads
//! - `NumCpusMinus1`: Uses number of CPUs minus 1 (leaves one CPU free)
//! - `IOHeavy`: Optimized for I/O-heavy workloads (2x CPU count)

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

/// Thread pool configuration strategies.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ThreadPoolStrategy {
    /// Use Rayon's default thread pool configuration
    Default,
    /// Use a fixed number of threads
    Fixed,
    /// Use number of CPUs minus 1 (leaves one CPU free)
    NumCpusMinus1,
    /// Optimized for I/O-heavy workloads (2x CPU count)
    IOHeavy,
}

impl ThreadPoolStrategy {
    /// Returns a string representation of the strategy for display purposes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadPoolStrategy::Default => "Default",
            ThreadPoolStrategy::Fixed => "Fixed",
            ThreadPoolStrategy::NumCpusMinus1 => "NumCpusMinus1",
            ThreadPoolStrategy::IOHeavy => "IOHeavy",
        }
    }

    /// Number of worker threads this strategy asks for, or `None` to keep rayon's default.
    ///
    /// # Errors
    /// `Fixed` requires a thread count greater than zero.
    pub fn thread_count(&self, n_threads: Option<usize>) -> Result<Option<usize>> {
        let cpus = num_cpus::get();
        let count = match self {
            ThreadPoolStrategy::Default => None,
            ThreadPoolStrategy::Fixed => match n_threads {
                Some(n) if n > 0 => Some(n),
                _ => anyhow::bail!("Fixed strategy requires --threads N with N > 0"),
            },
            ThreadPoolStrategy::NumCpusMinus1 => Some(std::cmp::max(1, cpus.saturating_sub(1))),
            ThreadPoolStrategy::IOHeavy => Some(cpus * 2),
        };
        Ok(count)
    }
}

/// Resolves the effective strategy: an explicit `--threads` count forces `Fixed`.
pub fn effective_strategy(
    strategy: ThreadPoolStrategy,
    n_threads: Option<usize>,
) -> ThreadPoolStrategy {
    match (strategy, n_threads) {
        (ThreadPoolStrategy::Default, Some(_)) => ThreadPoolStrategy::Fixed,
        _ => strategy,
    }
}

/// Configures the global thread pool and returns the number of worker threads.
///
/// # Arguments
/// * `strategy` - The thread pool strategy to use
/// * `n_threads` - Thread count for the `Fixed` strategy
///
/// # Errors
/// Fails if the strategy is misconfigured or the global pool was already built.
pub fn configure_pool(strategy: ThreadPoolStrategy, n_threads: Option<usize>) -> Result<usize> {
    let strategy = effective_strategy(strategy, n_threads);

    let Some(threads) = strategy.thread_count(n_threads)? else {
        let threads = rayon::current_num_threads();
        info!(threads, "using default thread pool strategy");
        return Ok(threads);
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to configure thread pool")?;

    info!(strategy = strategy.as_str(), threads, "configured thread pool");
    Ok(threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_pool_strategy_as_str() {
        assert_eq!(ThreadPoolStrategy::Default.as_str(), "Default");
        assert_eq!(ThreadPoolStrategy::Fixed.as_str(), "Fixed");
        assert_eq!(ThreadPoolStrategy::NumCpusMinus1.as_str(), "NumCpusMinus1");
        assert_eq!(ThreadPoolStrategy::IOHeavy.as_str(), "IOHeavy");
    }

    #[test]
    fn test_thread_counts() {
        let cpus = num_cpus::get();

        assert_eq!(ThreadPoolStrategy::Default.thread_count(None).unwrap(), None);
        assert_eq!(ThreadPoolStrategy::Fixed.thread_count(Some(3)).unwrap(), Some(3));
        assert_eq!(
            ThreadPoolStrategy::NumCpusMinus1.thread_count(None).unwrap(),
            Some(std::cmp::max(1, cpus - 1))
        );
        assert_eq!(
            ThreadPoolStrategy::IOHeavy.thread_count(None).unwrap(),
            Some(cpus * 2)
        );
    }

    #[test]
    fn test_fixed_requires_threads() {
        assert!(ThreadPoolStrategy::Fixed.thread_count(None).is_err());
        assert!(ThreadPoolStrategy::Fixed.thread_count(Some(0)).is_err());
    }

    #[test]
    fn test_threads_flag_forces_fixed() {
        assert_eq!(
            effective_strategy(ThreadPoolStrategy::Default, Some(2)),
            ThreadPoolStrategy::Fixed
        );
        assert_eq!(
            effective_strategy(ThreadPoolStrategy::IOHeavy, Some(2)),
            ThreadPoolStrategy::IOHeavy
        );
        assert_eq!(
            effective_strategy(ThreadPoolStrategy::Default, None),
            ThreadPoolStrategy::Default
        );
    }
}
