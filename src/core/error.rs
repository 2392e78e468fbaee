//! Error types for queue, pool and configuration operations.

use thiserror::Error;

/// Errors produced by the dungeon queue components.
#[derive(Debug, Error)]
pub enum LfgError {
    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration source could not be read.
    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),
    /// Configuration source could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// A worker or monitor thread could not be spawned.
    #[error("failed to spawn thread {thread}: {reason}")]
    Spawn {
        /// Name of the thread that failed to start.
        thread: String,
        /// Underlying OS error.
        reason: String,
    },
    /// A worker could not build its async runtime.
    #[error("worker {worker_id} runtime error: {reason}")]
    Runtime {
        /// Worker (and instance) index.
        worker_id: usize,
        /// Underlying error.
        reason: String,
    },
    /// A worker thread panicked before finishing its loop.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
    /// The status monitor thread panicked.
    #[error("status monitor panicked")]
    MonitorPanicked,
    /// A pool invariant was broken, e.g. releasing an idle instance.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
