//! Tests for error types

use lfg_dungeon_queue::core::LfgError;

#[test]
fn test_invalid_config_error() {
    let err = LfgError::InvalidConfig("max_instances must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: max_instances must be greater than 0"
    );
}

#[test]
fn test_spawn_error() {
    let err = LfgError::Spawn {
        thread: "lfg-worker-2".to_string(),
        reason: "resource temporarily unavailable".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "failed to spawn thread lfg-worker-2: resource temporarily unavailable"
    );
}

#[test]
fn test_worker_panicked_error() {
    let err = LfgError::WorkerPanicked(3);
    assert_eq!(format!("{}", err), "worker 3 panicked");
}

#[test]
fn test_invariant_violation_error() {
    let err = LfgError::InvariantViolation("instance 1 released while idle".to_string());
    assert_eq!(
        format!("{}", err),
        "invariant violation: instance 1 released while idle"
    );
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: LfgError = io.into();
    assert!(matches!(err, LfgError::ConfigIo(_)));
}
