//! # LFG Dungeon Queue
//!
//! A bounded pool of reusable dungeon instances serving a FIFO queue of parties.
//!
//! The crate models a matchmaking service: players are grouped into parties
//! (1 tank, 1 healer, 3 DPS), the parties wait in a queue, and a fixed number of
//! instances serve them concurrently. Each party occupies one instance for a
//! randomly drawn clear time, after which the instance is released for the next
//! party in line.
//!
//! ## Key Features
//!
//! - **Bounded Concurrency**: exactly `max_instances` worker threads, never more
//!   than `max_instances` clears in flight
//! - **Fair Selection**: round-robin instance selection, atomic with activation
//! - **Live Status**: a monitor thread prints a snapshot of every instance each
//!   time a worker signals a state change
//! - **Clean Termination**: the coordinator closes the state signal once all
//!   workers have stopped, so the monitor can never block forever
//! - **Cooperative Cancellation**: a shared [`core::CancelToken`] bounds run time
//!
//! ## Example
//!
//! ```rust,ignore
//! use lfg_dungeon_queue::builders::CoordinatorBuilder;
//! use lfg_dungeon_queue::config::LfgConfig;
//! use lfg_dungeon_queue::core::InstantExecutor;
//!
//! let report = CoordinatorBuilder::new(LfgConfig::default())
//!     .with_seed(7)
//!     .with_executor(InstantExecutor)
//!     .build()
//!     .run()?;
//!
//! assert_eq!(report.stats.clears_completed, u64::from(report.parties_formed));
//! ```
//!
//! For complete scenarios, see `tests/coordinator_test.rs`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling: party queue, instance pool, workers, monitor and coordinator.
pub mod core;
/// Configuration model and the providers that load it.
pub mod config;
/// Builders to assemble a coordinator from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
