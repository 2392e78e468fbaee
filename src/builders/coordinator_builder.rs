//! Fluent construction of a [`Coordinator`].

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigProvider, LfgConfig};
use crate::core::{CancelToken, ClearExecutor, Coordinator, LfgError, SleepExecutor};
use crate::util::Console;

/// Builder for [`Coordinator`], defaulting to stdout and one-second clear units.
///
/// ```rust,ignore
/// let coordinator = CoordinatorBuilder::new(config)
///     .with_seed(42)
///     .with_time_unit(Duration::from_millis(10))
///     .build();
/// let report = coordinator.run()?;
/// ```
pub struct CoordinatorBuilder<E = SleepExecutor>
where
    E: ClearExecutor,
{
    config: LfgConfig,
    executor: E,
    console: Option<Arc<Console>>,
    cancel: CancelToken,
    seed: Option<u64>,
    provider: Option<Arc<dyn ConfigProvider>>,
}

impl CoordinatorBuilder<SleepExecutor> {
    /// Start from an already validated configuration.
    #[must_use]
    pub fn new(config: LfgConfig) -> Self {
        Self {
            config,
            executor: SleepExecutor::default(),
            console: None,
            cancel: CancelToken::new(),
            seed: None,
            provider: None,
        }
    }

    /// Load the configuration from `provider`, which also receives the
    /// leftover player counts during the run.
    ///
    /// # Errors
    ///
    /// Returns the provider's load or validation error.
    pub fn from_provider(provider: Arc<dyn ConfigProvider>) -> Result<Self, LfgError> {
        let config = provider.load()?;
        let mut builder = Self::new(config);
        builder.provider = Some(provider);
        Ok(builder)
    }

    /// Sleep `clear_time * unit` per clear.
    #[must_use]
    pub fn with_time_unit(mut self, unit: Duration) -> Self {
        self.executor = SleepExecutor::new(unit);
        self
    }
}

impl<E> CoordinatorBuilder<E>
where
    E: ClearExecutor,
{
    /// Replace the clear executor.
    pub fn with_executor<E2>(self, executor: E2) -> CoordinatorBuilder<E2>
    where
        E2: ClearExecutor,
    {
        CoordinatorBuilder {
            config: self.config,
            executor,
            console: self.console,
            cancel: self.cancel,
            seed: self.seed,
            provider: self.provider,
        }
    }

    /// Write status and summary output to `console`.
    #[must_use]
    pub fn with_console(mut self, console: Arc<Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Share a cancellation token with the run.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Seed clear-time draws for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble the coordinator.
    #[must_use]
    pub fn build(self) -> Coordinator<E> {
        let console = self
            .console
            .unwrap_or_else(|| Arc::new(Console::stdout()));
        let coordinator = Coordinator::new(self.config, self.executor, console)
            .with_seed(self.seed)
            .with_cancel(self.cancel);
        match self.provider {
            Some(provider) => coordinator.with_provider(provider),
            None => coordinator,
        }
    }
}
