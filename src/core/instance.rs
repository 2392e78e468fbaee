//! Instance slots and their read-only views.

use serde::{Deserialize, Serialize};

/// Stable instance handle: the slot's index in the pool.
pub type InstanceId = usize;

/// A reusable dungeon slot that serves one party at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Stable identifier, `0..max_instances`.
    pub id: InstanceId,
    /// True while a party occupies the instance.
    pub active: bool,
    /// Parties served over the instance's lifetime.
    pub total_parties_served: u32,
    /// Accumulated clear time in seconds.
    pub total_time_served: u64,
}

impl Instance {
    /// Create an idle instance with zeroed statistics.
    #[must_use]
    pub const fn new(id: InstanceId) -> Self {
        Self {
            id,
            active: false,
            total_parties_served: 0,
            total_time_served: 0,
        }
    }

    /// Record a finished clear and free the slot.
    pub(crate) fn complete(&mut self, clear_time: u32) {
        self.total_parties_served += 1;
        self.total_time_served += u64::from(clear_time);
        self.active = false;
    }

    /// Status snapshot of this instance.
    #[must_use]
    pub const fn status(&self) -> InstanceStatus {
        InstanceStatus {
            id: self.id,
            active: self.active,
        }
    }

    /// Lifetime statistics of this instance.
    #[must_use]
    pub const fn summary(&self) -> InstanceSummary {
        InstanceSummary {
            id: self.id,
            parties_served: self.total_parties_served,
            time_served: self.total_time_served,
        }
    }
}

/// Point-in-time activity of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStatus {
    /// Instance identifier.
    pub id: InstanceId,
    /// Whether a party occupies it.
    pub active: bool,
}

impl InstanceStatus {
    /// Status line as printed by the monitor.
    #[must_use]
    pub fn line(&self) -> String {
        let state = if self.active { "active" } else { "empty" };
        format!("Instance {}: {state}", self.id)
    }
}

/// Final statistics of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSummary {
    /// Instance identifier.
    pub id: InstanceId,
    /// Parties served.
    pub parties_served: u32,
    /// Seconds spent serving parties.
    pub time_served: u64,
}

impl InstanceSummary {
    /// Summary line as printed at the end of a run.
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "Instance {}: {} parties, {} seconds.",
            self.id, self.parties_served, self.time_served
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_updates_stats() {
        let mut instance = Instance::new(3);
        instance.active = true;
        instance.complete(7);
        instance.active = true;
        instance.complete(5);

        assert!(!instance.active);
        assert_eq!(instance.summary().parties_served, 2);
        assert_eq!(instance.summary().time_served, 12);
    }

    #[test]
    fn test_lines() {
        let mut instance = Instance::new(1);
        assert_eq!(instance.status().line(), "Instance 1: empty");
        instance.active = true;
        assert_eq!(instance.status().line(), "Instance 1: active");
        instance.complete(4);
        assert_eq!(instance.summary().line(), "Instance 1: 1 parties, 4 seconds.");
    }
}
