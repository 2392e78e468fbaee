//! Final, read-only results of a run.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{InstanceSummary, PlayerCounts, RunStats};

/// Header printed above the per-instance summary.
pub const SUMMARY_HEADER: &str = "Summary:";

/// Everything a run produced, available once it has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier of this run, also recorded on its tracing span.
    pub run_id: Uuid,
    /// Lifetime statistics of every instance, in id order.
    pub instances: Vec<InstanceSummary>,
    /// Players that could not complete a party.
    pub leftover: PlayerCounts,
    /// Parties formed at startup.
    pub parties_formed: u32,
    /// Parties never dequeued (zero instances or cancellation).
    pub parties_unserved: u32,
    /// Run-wide counters.
    pub stats: RunStats,
}

impl RunReport {
    /// Total parties served across all instances.
    #[must_use]
    pub fn total_parties_served(&self) -> u64 {
        self.instances
            .iter()
            .map(|i| u64::from(i.parties_served))
            .sum()
    }

    /// Total seconds served across all instances.
    #[must_use]
    pub fn total_time_served(&self) -> u64 {
        self.instances.iter().map(|i| i.time_served).sum()
    }

    /// One summary line per instance.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        self.instances.iter().map(InstanceSummary::line).collect()
    }

    /// Line describing the leftover players.
    #[must_use]
    pub fn remaining_players_line(&self) -> String {
        format!(
            "Remaining players: {} tanks, {} healers, {} DPS.",
            self.leftover.tanks, self.leftover.healers, self.leftover.dps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_and_lines() {
        let report = RunReport {
            run_id: Uuid::nil(),
            instances: vec![
                InstanceSummary {
                    id: 0,
                    parties_served: 2,
                    time_served: 9,
                },
                InstanceSummary {
                    id: 1,
                    parties_served: 1,
                    time_served: 4,
                },
            ],
            leftover: PlayerCounts::new(7, 7, 1),
            parties_formed: 3,
            parties_unserved: 0,
            stats: RunStats::default(),
        };

        assert_eq!(report.total_parties_served(), 3);
        assert_eq!(report.total_time_served(), 13);
        assert_eq!(
            report.summary_lines(),
            vec![
                "Instance 0: 2 parties, 9 seconds.",
                "Instance 1: 1 parties, 4 seconds."
            ]
        );
        assert_eq!(
            report.remaining_players_line(),
            "Remaining players: 7 tanks, 7 healers, 1 DPS."
        );
    }
}
