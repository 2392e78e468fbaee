//! Run coordinator: the only component aware of whole-system completion.
//!
//! A run is a strict barrier sequence:
//!
//! 1. build the instance pool and form the party queue
//! 2. hand the leftover players to the config provider, if any
//! 3. start the status monitor, then one worker per instance
//! 4. join every worker
//! 5. close the state signal (the final signal) and join the monitor
//! 6. print the per-instance summary and the leftover players

use std::sync::Arc;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::{ConfigProvider, LfgConfig};
use crate::core::report::SUMMARY_HEADER;
use crate::core::{
    form_parties, CancelToken, ClearExecutor, ClearTimeSource, InstancePool, LfgError, PartyQueue,
    RunContext, RunReport, StatusMonitor, WorkerPool,
};
use crate::util::Console;

/// Drives one complete run of the dungeon queue.
pub struct Coordinator<E>
where
    E: ClearExecutor,
{
    config: LfgConfig,
    executor: E,
    console: Arc<Console>,
    cancel: CancelToken,
    seed: Option<u64>,
    provider: Option<Arc<dyn ConfigProvider>>,
}

impl<E> Coordinator<E>
where
    E: ClearExecutor,
{
    /// Create a coordinator writing to `console`.
    ///
    /// The configuration is taken as already validated; a zero instance count
    /// is tolerated and simply serves nothing.
    pub fn new(config: LfgConfig, executor: E, console: Arc<Console>) -> Self {
        Self {
            config,
            executor,
            console,
            cancel: CancelToken::new(),
            seed: None,
            provider: None,
        }
    }

    /// Use a fixed seed for clear-time draws.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Share a cancellation token with the caller.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Report leftover players to `provider` once parties are formed.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Configuration this coordinator runs with.
    #[must_use]
    pub const fn config(&self) -> &LfgConfig {
        &self.config
    }

    /// Token that cancels this coordinator's run.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Execute the run to completion and return its report.
    ///
    /// # Errors
    ///
    /// Returns an error if a thread cannot be spawned, a worker fails or
    /// panics, or the monitor panics. The monitor is always shut down first.
    pub fn run(&self) -> Result<RunReport, LfgError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("run", %run_id);
        let _enter = span.enter();

        let cfg = &self.config;
        let instance_count = cfg.max_instances as usize;
        let pool = InstancePool::new(instance_count);

        let formation = form_parties(cfg.players());
        let leftover = formation.leftover;
        let parties_formed = u32::try_from(formation.parties.len()).unwrap_or(u32::MAX);
        if let Some(provider) = &self.provider {
            provider.update_players(leftover);
        }

        info!(
            instances = instance_count,
            parties = parties_formed,
            leftover_tanks = leftover.tanks,
            leftover_healers = leftover.healers,
            leftover_dps = leftover.dps,
            "starting run"
        );
        if instance_count == 0 && parties_formed > 0 {
            warn!(
                parties = parties_formed,
                "no instances configured, queued parties will not be served"
            );
        }

        let clear_times = match self.seed {
            Some(seed) => ClearTimeSource::seeded(cfg.min_clear_time, cfg.max_clear_time, seed),
            None => ClearTimeSource::new(cfg.min_clear_time, cfg.max_clear_time),
        };
        let ctx = Arc::new(RunContext::new(
            PartyQueue::new(formation.parties),
            pool,
            clear_times,
            self.cancel.clone(),
        ));

        let monitor = StatusMonitor::spawn(Arc::clone(&ctx), Arc::clone(&self.console))?;

        let workers_result = WorkerPool::spawn(&ctx, &self.executor, instance_count)
            .and_then(WorkerPool::join);

        // Final signal: every worker has stopped, so the monitor must not wait again.
        ctx.signal.close();
        let status_snapshots = monitor.join()?;
        workers_result?;

        let report = RunReport {
            run_id,
            instances: ctx.pool.summaries(),
            leftover,
            parties_formed,
            parties_unserved: u32::try_from(ctx.queue.len()).unwrap_or(u32::MAX),
            stats: ctx
                .counters
                .snapshot(instance_count, ctx.signal.raised(), status_snapshots),
        };

        self.console
            .print_block(SUMMARY_HEADER, report.summary_lines());
        self.console.print_line(&report.remaining_players_line());

        info!(
            served = report.total_parties_served(),
            unserved = report.parties_unserved,
            time_served = report.total_time_served(),
            "run complete"
        );
        Ok(report)
    }
}
