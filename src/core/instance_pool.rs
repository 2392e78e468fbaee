//! Fixed-size instance pool with round-robin selection.
//!
//! The pool owns every [`Instance`] together with the selector cursor (the index
//! of the instance last handed out). Both live behind a single
//! `parking_lot::Mutex`, which makes "pick a free instance" and "mark it active"
//! one atomic step. The lock is only held for bookkeeping and must never be held
//! across a clear.

use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::core::{CancelToken, Instance, InstanceId, InstanceStatus, InstanceSummary, LfgError};

/// Upper bound on one blocking wait for a free instance before re-checking cancellation.
const ACQUIRE_RETRY_WAIT: Duration = Duration::from_millis(50);

struct PoolState {
    instances: Vec<Instance>,
    /// Index of the instance last handed out.
    last_index: Option<usize>,
}

impl PoolState {
    /// Round-robin scan starting after `last_index`, wrapping exactly once.
    fn select_and_activate(&mut self) -> Option<InstanceId> {
        let index = next_free(&self.instances, self.last_index)?;
        self.instances[index].active = true;
        self.last_index = Some(index);
        Some(index)
    }
}

/// Find the first idle instance after `last_index`, wrapping around once.
fn next_free(instances: &[Instance], last_index: Option<usize>) -> Option<usize> {
    let size = instances.len();
    if size == 0 {
        return None;
    }
    let start = last_index.map_or(0, |last| (last + 1) % size);
    (0..size)
        .map(|offset| (start + offset) % size)
        .find(|&index| !instances[index].active)
}

/// The pool of instances shared by all workers and the status monitor.
pub struct InstancePool {
    state: Mutex<PoolState>,
    /// Signalled whenever an instance is released.
    freed: Condvar,
}

impl InstancePool {
    /// Create `size` idle instances with ids `0..size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            state: Mutex::new(PoolState {
                instances: (0..size).map(Instance::new).collect(),
                last_index: None,
            }),
            freed: Condvar::new(),
        }
    }

    /// Number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().instances.len()
    }

    /// Whether the pool has no instances at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().instances.is_empty()
    }

    /// Select a free instance round-robin and mark it active, or `None` if all are busy.
    pub fn try_acquire(&self) -> Option<InstanceId> {
        self.state.lock().select_and_activate()
    }

    /// Block until an instance can be acquired.
    ///
    /// Returns `None` if the pool is empty or `cancel` fires while waiting.
    pub fn acquire(&self, cancel: &CancelToken) -> Option<InstanceId> {
        let mut state = self.state.lock();
        loop {
            if state.instances.is_empty() || cancel.is_cancelled() {
                return None;
            }
            if let Some(id) = state.select_and_activate() {
                return Some(id);
            }
            tracing::trace!("no free instance, waiting for a release");
            self.freed.wait_for(&mut state, ACQUIRE_RETRY_WAIT);
        }
    }

    /// Record a finished clear on `id` and mark it idle.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::InvariantViolation` if `id` is unknown or the instance
    /// is not active.
    pub fn release(&self, id: InstanceId, clear_time: u32) -> Result<(), LfgError> {
        {
            let mut state = self.state.lock();
            let instance = state.instances.get_mut(id).ok_or_else(|| {
                LfgError::InvariantViolation(format!("instance {id} does not exist"))
            })?;
            if !instance.active {
                return Err(LfgError::InvariantViolation(format!(
                    "instance {id} released while idle"
                )));
            }
            instance.complete(clear_time);
        }
        self.freed.notify_one();
        Ok(())
    }

    /// Snapshot of every instance's activity, in id order.
    #[must_use]
    pub fn statuses(&self) -> Vec<InstanceStatus> {
        self.state.lock().instances.iter().map(Instance::status).collect()
    }

    /// Whether no instance is serving a party.
    #[must_use]
    pub fn all_idle(&self) -> bool {
        self.state.lock().instances.iter().all(|i| !i.active)
    }

    /// Number of instances currently serving a party.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state.lock().instances.iter().filter(|i| i.active).count()
    }

    /// Lifetime statistics of every instance, in id order.
    #[must_use]
    pub fn summaries(&self) -> Vec<InstanceSummary> {
        self.state.lock().instances.iter().map(Instance::summary).collect()
    }
}
