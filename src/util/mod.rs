//! Shared utilities: console output and telemetry.

pub mod console;
pub mod telemetry;

pub use console::{CapturedOutput, Console};
pub use telemetry::init_tracing;
