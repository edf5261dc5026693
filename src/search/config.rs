use log::warn;

/// The largest Worker pool a search will start.
pub const MAX_WORKERS: usize = 32;

/// Options for configuring a [`parallel_search`](crate::parallel_search)
///
/// Default options:
/// ```
/// # use parallel_astar::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         workers: 4,
///         yield_when_idle: true,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The number of Workers expanding Nodes concurrently (defaults to `4`).
    ///
    /// Values above [`MAX_WORKERS`] are clamped, `0` is raised to `1`. See
    /// [`validated`](SearchConfig::validated).
    pub workers: usize,
    /// `true` (default): an idle Worker yields its thread before asking for work again.
    ///
    /// `false`: idle Workers poll in a tight loop. Slightly lower latency when new work appears,
    /// at the price of burning a core per idle Worker.
    pub yield_when_idle: bool,
}

impl SearchConfig {
    /// A config with the default options and the given number of Workers.
    ///
    /// ```
    /// # use parallel_astar::SearchConfig;
    /// assert_eq!(SearchConfig::with_workers(8).workers, 8);
    /// ```
    pub fn with_workers(workers: usize) -> SearchConfig {
        SearchConfig {
            workers,
            ..Default::default()
        }
    }

    /// Returns a copy with the Worker count forced into `1..=MAX_WORKERS`, logging a warning for
    /// every adjustment.
    ///
    /// ```
    /// # use parallel_astar::{SearchConfig, MAX_WORKERS};
    /// assert_eq!(SearchConfig::with_workers(100).validated().workers, MAX_WORKERS);
    /// assert_eq!(SearchConfig::with_workers(0).validated().workers, 1);
    /// assert_eq!(SearchConfig::with_workers(3).validated().workers, 3);
    /// ```
    pub fn validated(self) -> SearchConfig {
        let workers = if self.workers > MAX_WORKERS {
            warn!(
                "{} workers requested, but at most {} are allowed; using {}",
                self.workers, MAX_WORKERS, MAX_WORKERS
            );
            MAX_WORKERS
        } else if self.workers == 0 {
            warn!("0 workers requested; using 1");
            1
        } else {
            self.workers
        };
        SearchConfig { workers, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            workers: 4,
            yield_when_idle: true,
        }
    }
}
