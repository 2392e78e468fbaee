//! One worker thread per instance slot.
//!
//! Each worker repeatedly takes the next party from the queue, acquires a free
//! instance, runs the clear and releases the instance. Concurrency is bounded by
//! the number of workers: exactly `max_instances` threads exist, so at most
//! `max_instances` clears run at once and no separate permit is needed.
//!
//! # Design Principles
//!
//! - **No busy spinning**: waiting for an instance blocks on the pool's condvar,
//!   and clears await a timer on the worker's own runtime
//! - **Lock-free counters**: run statistics are plain atomics
//! - **Clean shutdown**: workers exit on an empty queue or a cancelled token

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::core::{ClearExecutor, LfgError, RunContext};

/// Statistics about one run, snapshotted from [`RunCounters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Worker threads started.
    pub worker_count: usize,
    /// Parties taken off the queue.
    pub parties_dequeued: u64,
    /// Clears that acquired an instance and began.
    pub clears_started: u64,
    /// Clears that finished and released their instance.
    pub clears_completed: u64,
    /// Parties dequeued but dropped because the run was cancelled.
    pub parties_abandoned: u64,
    /// Sum of every clear time drawn, in seconds.
    pub clear_time_drawn: u64,
    /// State-change signals raised by workers.
    pub signals_raised: u64,
    /// Status snapshots printed by the monitor.
    pub status_snapshots: u64,
}

/// Run-wide counters, updated lock-free by the workers.
#[derive(Debug, Default)]
pub struct RunCounters {
    parties_dequeued: AtomicU64,
    clears_started: AtomicU64,
    clears_completed: AtomicU64,
    parties_abandoned: AtomicU64,
    clear_time_drawn: AtomicU64,
}

impl RunCounters {
    /// Snapshot the counters; the caller supplies figures tracked elsewhere.
    #[must_use]
    pub fn snapshot(&self, worker_count: usize, signals_raised: u64, status_snapshots: u64) -> RunStats {
        RunStats {
            worker_count,
            parties_dequeued: self.parties_dequeued.load(Ordering::Relaxed),
            clears_started: self.clears_started.load(Ordering::Relaxed),
            clears_completed: self.clears_completed.load(Ordering::Relaxed),
            parties_abandoned: self.parties_abandoned.load(Ordering::Relaxed),
            clear_time_drawn: self.clear_time_drawn.load(Ordering::Relaxed),
            signals_raised,
            status_snapshots,
        }
    }
}

/// Handles to the running worker threads.
pub struct WorkerPool {
    workers: Vec<JoinHandle<Result<(), LfgError>>>,
}

impl WorkerPool {
    /// Spawn `worker_count` workers sharing `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::Spawn` if a thread cannot be created. Workers already
    /// started are cancelled and joined before returning.
    pub fn spawn<E>(ctx: &Arc<RunContext>, executor: &E, worker_count: usize) -> Result<Self, LfgError>
    where
        E: ClearExecutor,
    {
        let mut workers = Vec::with_capacity(worker_count);

        for worker_id in 0..worker_count {
            match spawn_worker(worker_id, Arc::clone(ctx), executor.clone()) {
                Ok(handle) => workers.push(handle),
                Err(e) => {
                    error!(worker_id, error = %e, "failed to spawn worker, cancelling run");
                    ctx.cancel.cancel();
                    let started = Self { workers };
                    if let Err(join_err) = started.join() {
                        warn!(error = %join_err, "worker failed while unwinding spawn error");
                    }
                    return Err(LfgError::Spawn {
                        thread: worker_thread_name(worker_id),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(worker_count, "worker pool started");
        Ok(Self { workers })
    }

    /// Number of workers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether no worker was started.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Wait for every worker to stop.
    ///
    /// All workers are joined even if one fails; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first worker error, or `LfgError::WorkerPanicked`.
    pub fn join(self) -> Result<(), LfgError> {
        let mut first_error = None;
        for (worker_id, handle) in self.workers.into_iter().enumerate() {
            let outcome = handle
                .join()
                .unwrap_or(Err(LfgError::WorkerPanicked(worker_id)));
            match outcome {
                Ok(()) => debug!(worker_id, "worker joined"),
                Err(e) => {
                    error!(worker_id, error = %e, "worker stopped with an error");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

fn worker_thread_name(worker_id: usize) -> String {
    format!("lfg-worker-{worker_id}")
}

/// Spawn one worker thread with its own single-threaded tokio runtime.
fn spawn_worker<E>(
    worker_id: usize,
    ctx: Arc<RunContext>,
    executor: E,
) -> std::io::Result<JoinHandle<Result<(), LfgError>>>
where
    E: ClearExecutor,
{
    thread::Builder::new()
        .name(worker_thread_name(worker_id))
        .spawn(move || {
            debug!(worker_id, "worker thread started");

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| LfgError::Runtime {
                    worker_id,
                    reason: e.to_string(),
                })?;

            let result = worker_loop(worker_id, &ctx, &executor, &rt);
            debug!(worker_id, "worker thread exiting");
            result
        })
}

fn worker_loop<E>(
    worker_id: usize,
    ctx: &RunContext,
    executor: &E,
    rt: &tokio::runtime::Runtime,
) -> Result<(), LfgError>
where
    E: ClearExecutor,
{
    loop {
        if ctx.cancel.is_cancelled() {
            debug!(worker_id, "worker cancelled");
            return Ok(());
        }

        let Some(party) = ctx.queue.dequeue() else {
            debug!(worker_id, "party queue empty");
            return Ok(());
        };
        ctx.counters.parties_dequeued.fetch_add(1, Ordering::Relaxed);

        let Some(instance_id) = ctx.pool.acquire(&ctx.cancel) else {
            warn!(worker_id, party_id = party.id, "cancelled while waiting for an instance");
            ctx.counters.parties_abandoned.fetch_add(1, Ordering::Relaxed);
            ctx.queue.finish();
            ctx.signal.notify();
            return Ok(());
        };

        let clear_time = ctx.clear_times.draw();
        ctx.counters.clears_started.fetch_add(1, Ordering::Relaxed);
        ctx.counters
            .clear_time_drawn
            .fetch_add(u64::from(clear_time), Ordering::Relaxed);
        debug!(worker_id, party_id = party.id, instance_id, clear_time, "clear started");
        ctx.signal.notify();

        rt.block_on(executor.clear(party, instance_id, clear_time));

        let released = ctx.pool.release(instance_id, clear_time);
        ctx.queue.finish();
        ctx.signal.notify();
        released?;

        ctx.counters.clears_completed.fetch_add(1, Ordering::Relaxed);
        info!(
            instance_id,
            party_id = party.id,
            clear_time,
            "instance finished serving party"
        );
    }
}
