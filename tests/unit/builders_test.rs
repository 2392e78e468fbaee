//! Tests for building coordinators

use lfg_dungeon_queue::builders::CoordinatorBuilder;
use lfg_dungeon_queue::config::{LfgConfig, StaticConfigProvider};
use lfg_dungeon_queue::core::{CancelToken, InstantExecutor};
use std::sync::Arc;

#[test]
fn test_builder_keeps_config() {
    let config = LfgConfig {
        max_instances: 8,
        ..LfgConfig::default()
    };
    let coordinator = CoordinatorBuilder::new(config)
        .with_executor(InstantExecutor)
        .build();
    assert_eq!(coordinator.config(), &config);
}

#[test]
fn test_builder_shares_cancel_token() {
    let cancel = CancelToken::new();
    let coordinator = CoordinatorBuilder::new(LfgConfig::default())
        .with_cancel(cancel.clone())
        .build();

    cancel.cancel();
    assert!(coordinator.cancel_token().is_cancelled());
}

#[test]
fn test_builder_from_invalid_provider() {
    let provider = Arc::new(StaticConfigProvider::new(LfgConfig {
        min_clear_time: 10,
        max_clear_time: 2,
        ..LfgConfig::default()
    }));
    assert!(CoordinatorBuilder::from_provider(provider).is_err());
}
