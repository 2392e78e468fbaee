//! Auto-resetting state-change signal.
//!
//! Workers raise the signal whenever a party becomes active or an instance is
//! freed; the status monitor waits on it. Raising sets a pending flag under the
//! signal's mutex and wakes one waiter; a successful wait consumes the flag.
//! Several raises before the waiter runs collapse into one wake, which is fine
//! because the waiter always re-reads current state.
//!
//! A signal can also be closed. Closing is sticky and wakes every waiter, so a
//! monitor that checks its exit condition just before the last raise can never
//! block forever.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

/// Outcome of a wait on a [`StateSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// State changed; more changes may follow.
    Changed,
    /// The signal was closed; no further changes will be raised.
    Closed,
}

#[derive(Debug, Default)]
struct SignalState {
    pending: bool,
    closed: bool,
}

/// A reusable wake-one, auto-reset notification with a terminal close.
#[derive(Debug, Default)]
pub struct StateSignal {
    state: Mutex<SignalState>,
    condvar: Condvar,
    raised: AtomicU64,
}

impl StateSignal {
    /// Create an unsignalled, open signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state change and wake one waiter.
    pub fn notify(&self) {
        self.raised.fetch_add(1, Ordering::Relaxed);
        {
            let mut state = self.state.lock();
            state.pending = true;
        }
        self.condvar.notify_one();
    }

    /// Close the signal and wake every waiter. Later waits return immediately.
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            state.closed = true;
        }
        self.condvar.notify_all();
    }

    /// Whether [`Self::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Total number of [`Self::notify`] calls so far.
    #[must_use]
    pub fn raised(&self) -> u64 {
        self.raised.load(Ordering::Relaxed)
    }

    /// Block until the signal is raised or closed, consuming a pending raise.
    pub fn wait(&self) -> Wake {
        let mut state = self.state.lock();
        while !state.pending && !state.closed {
            self.condvar.wait(&mut state);
        }
        Self::consume(&mut state)
    }

    /// Like [`Self::wait`], giving up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Wake> {
        let mut state = self.state.lock();
        if !state.pending && !state.closed {
            self.condvar
                .wait_while_for(&mut state, |s| !s.pending && !s.closed, timeout);
        }
        if state.pending || state.closed {
            Some(Self::consume(&mut state))
        } else {
            None
        }
    }

    fn consume(state: &mut SignalState) -> Wake {
        state.pending = false;
        if state.closed {
            Wake::Closed
        } else {
            Wake::Changed
        }
    }
}
