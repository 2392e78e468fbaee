//! Status monitor: prints every instance's activity on each state change.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::core::{InstanceStatus, LfgError, RunContext, Wake};
use crate::util::Console;

/// Header printed above each status snapshot.
pub const STATUS_HEADER: &str = "Status:";

/// Handle to the monitor thread.
pub struct StatusMonitor {
    handle: JoinHandle<u64>,
}

impl StatusMonitor {
    /// Start the monitor on its own thread.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::Spawn` if the thread cannot be created.
    pub fn spawn(ctx: Arc<RunContext>, console: Arc<Console>) -> Result<Self, LfgError> {
        let handle = thread::Builder::new()
            .name("lfg-status".into())
            .spawn(move || monitor_loop(&ctx, &console))
            .map_err(|e| LfgError::Spawn {
                thread: "lfg-status".into(),
                reason: e.to_string(),
            })?;
        Ok(Self { handle })
    }

    /// Wait for the monitor to exit and return how many snapshots it printed.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::MonitorPanicked` if the monitor thread panicked.
    pub fn join(self) -> Result<u64, LfgError> {
        self.handle.join().map_err(|_| LfgError::MonitorPanicked)
    }
}

/// Wait, snapshot, print; stop once the work is done or the signal is closed.
///
/// The pool, queue and console locks are taken one after another, never
/// together. A snapshot may be momentarily stale for an instance that is
/// changing concurrently.
fn monitor_loop(ctx: &RunContext, console: &Console) -> u64 {
    let mut snapshots = 0;
    loop {
        let wake = ctx.signal.wait();
        // Checked before the snapshot so the last block printed is the final state.
        let done = ctx.queue.is_drained() && ctx.pool.all_idle();

        let statuses = ctx.pool.statuses();
        console.print_block(STATUS_HEADER, statuses.iter().map(InstanceStatus::line));
        snapshots += 1;

        if wake == Wake::Closed {
            debug!(snapshots, "state signal closed, monitor exiting");
            break;
        }
        if done {
            debug!(snapshots, "queue drained and all instances idle, monitor exiting");
            break;
        }
    }
    snapshots
}
