//! Clear execution: the work a party does while it occupies an instance.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::{InstanceId, Party};

/// Runs one clear of `party` in instance `instance_id`.
///
/// Each worker thread drives its executor on a dedicated current-thread tokio
/// runtime, so implementations may await timers freely without blocking other
/// workers.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use lfg_dungeon_queue::core::{ClearExecutor, InstanceId, Party};
///
/// #[derive(Clone)]
/// struct LoggingExecutor;
///
/// #[async_trait]
/// impl ClearExecutor for LoggingExecutor {
///     async fn clear(&self, party: Party, instance_id: InstanceId, clear_time: u32) {
///         println!("party {} in instance {instance_id} for {clear_time}s", party.id);
///     }
/// }
/// ```
#[async_trait]
pub trait ClearExecutor: Send + Sync + Clone + 'static {
    /// Simulate the clear. `clear_time` is in seconds.
    async fn clear(&self, party: Party, instance_id: InstanceId, clear_time: u32);
}

/// Sleeps `clear_time` units of wall-clock time per clear.
///
/// The default unit is one second; tests shrink it to keep runs short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepExecutor {
    unit: Duration,
}

impl SleepExecutor {
    /// Sleep `clear_time * unit` per clear.
    #[must_use]
    pub const fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// Duration of one clear-time unit.
    #[must_use]
    pub const fn unit(&self) -> Duration {
        self.unit
    }
}

impl Default for SleepExecutor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl ClearExecutor for SleepExecutor {
    async fn clear(&self, _party: Party, _instance_id: InstanceId, clear_time: u32) {
        tokio::time::sleep(self.unit * clear_time).await;
    }
}

/// Finishes every clear immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantExecutor;

#[async_trait]
impl ClearExecutor for InstantExecutor {
    async fn clear(&self, _party: Party, _instance_id: InstanceId, _clear_time: u32) {
        tokio::task::yield_now().await;
    }
}
