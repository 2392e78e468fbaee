//! Configuration model and providers.

pub mod lfg;
pub mod provider;

pub use lfg::{LfgConfig, MAX_CLEAR_TIME_LIMIT, MAX_INSTANCES_LIMIT};
pub use provider::{ConfigProvider, FileConfigProvider, StaticConfigProvider};
