//! Core scheduling: party queue, instance pool, workers, monitor and coordinator.

pub mod cancel;
pub mod clear_time;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod executor;
pub mod instance;
pub mod instance_pool;
pub mod monitor;
pub mod party;
pub mod report;
pub mod signal;
pub mod worker_pool;

pub use cancel::CancelToken;
pub use clear_time::ClearTimeSource;
pub use context::RunContext;
pub use coordinator::Coordinator;
pub use error::{AppResult, LfgError};
pub use executor::{ClearExecutor, InstantExecutor, SleepExecutor};
pub use instance::{Instance, InstanceId, InstanceStatus, InstanceSummary};
pub use instance_pool::InstancePool;
pub use monitor::StatusMonitor;
pub use party::{form_parties, Formation, Party, PartyId, PartyQueue, PlayerCounts};
pub use report::RunReport;
pub use signal::{StateSignal, Wake};
pub use worker_pool::{RunCounters, RunStats, WorkerPool};
