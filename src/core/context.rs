//! Shared state handed to every worker and to the status monitor.

use crate::core::{CancelToken, ClearTimeSource, InstancePool, PartyQueue, RunCounters, StateSignal};

/// Everything one run shares between threads.
///
/// Each member carries its own lock. No code path holds two of them at once:
/// workers and the monitor take them one after another.
pub struct RunContext {
    /// Parties waiting to be served.
    pub queue: PartyQueue,
    /// Instances and the round-robin selector cursor.
    pub pool: InstancePool,
    /// State-change notifications for the status monitor.
    pub signal: StateSignal,
    /// Clear-time draws.
    pub clear_times: ClearTimeSource,
    /// Run-wide counters.
    pub counters: RunCounters,
    /// Cooperative stop flag.
    pub cancel: CancelToken,
}

impl RunContext {
    /// Assemble a context with a fresh signal and zeroed counters.
    #[must_use]
    pub fn new(
        queue: PartyQueue,
        pool: InstancePool,
        clear_times: ClearTimeSource,
        cancel: CancelToken,
    ) -> Self {
        Self {
            queue,
            pool,
            signal: StateSignal::new(),
            clear_times,
            counters: RunCounters::default(),
            cancel,
        }
    }
}
