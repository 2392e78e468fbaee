//! Party formation and the shared FIFO party queue.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Party identifier, assigned sequentially from 0 in queue order.
pub type PartyId = u32;

/// Tanks required per party.
pub const TANKS_PER_PARTY: u32 = 1;
/// Healers required per party.
pub const HEALERS_PER_PARTY: u32 = 1;
/// DPS required per party.
pub const DPS_PER_PARTY: u32 = 3;

/// An immutable unit of work waiting for an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    /// Stable identifier.
    pub id: PartyId,
}

impl Party {
    /// Create a party with the given id.
    #[must_use]
    pub const fn new(id: PartyId) -> Self {
        Self { id }
    }
}

/// Player counts per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounts {
    /// Tank players.
    pub tanks: u32,
    /// Healer players.
    pub healers: u32,
    /// DPS players.
    pub dps: u32,
}

impl PlayerCounts {
    /// Create a new set of counts.
    #[must_use]
    pub const fn new(tanks: u32, healers: u32, dps: u32) -> Self {
        Self {
            tanks,
            healers,
            dps,
        }
    }

    /// Whether these counts can still fill one more party.
    #[must_use]
    pub const fn can_form_party(&self) -> bool {
        self.tanks >= TANKS_PER_PARTY
            && self.healers >= HEALERS_PER_PARTY
            && self.dps >= DPS_PER_PARTY
    }
}

/// Result of grouping players into parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    /// Parties in FIFO order.
    pub parties: VecDeque<Party>,
    /// Players left over that could not complete a party.
    pub leftover: PlayerCounts,
}

/// Greedily group players into parties of 1 tank, 1 healer and 3 DPS.
///
/// Party ids start at 0 and increase by one per party. The leftover counts
/// never satisfy the recipe again.
#[must_use]
pub fn form_parties(players: PlayerCounts) -> Formation {
    let mut remaining = players;
    let mut parties = VecDeque::new();
    let mut next_id: PartyId = 0;

    while remaining.can_form_party() {
        parties.push_back(Party::new(next_id));
        next_id += 1;
        remaining.tanks -= TANKS_PER_PARTY;
        remaining.healers -= HEALERS_PER_PARTY;
        remaining.dps -= DPS_PER_PARTY;
    }

    Formation {
        parties,
        leftover: remaining,
    }
}

struct QueueState {
    parties: VecDeque<Party>,
    /// Parties handed to a worker whose clear has not finished yet.
    outstanding: usize,
}

/// FIFO queue of parties shared by all workers.
///
/// Dequeues are mutually exclusive, so no party is ever handed out twice. The
/// queue is filled once at construction and never refilled.
pub struct PartyQueue {
    state: Mutex<QueueState>,
}

impl PartyQueue {
    /// Create a queue holding the given parties in order.
    #[must_use]
    pub fn new(parties: VecDeque<Party>) -> Self {
        Self {
            state: Mutex::new(QueueState {
                parties,
                outstanding: 0,
            }),
        }
    }

    /// Take the next party, marking it outstanding until [`Self::finish`] is called.
    pub fn dequeue(&self) -> Option<Party> {
        let mut state = self.state.lock();
        let party = state.parties.pop_front()?;
        state.outstanding += 1;
        Some(party)
    }

    /// Mark one previously dequeued party as done with.
    pub fn finish(&self) {
        let mut state = self.state.lock();
        state.outstanding = state.outstanding.saturating_sub(1);
    }

    /// Parties still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().parties.len()
    }

    /// Whether no party is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().parties.is_empty()
    }

    /// Whether the queue is empty and no dequeued party is still in a worker's hands.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        let state = self.state.lock();
        state.parties.is_empty() && state.outstanding == 0
    }
}
