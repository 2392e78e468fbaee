//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize tracing. Users can install their own subscriber; this helper
/// installs a default `RUST_LOG`-driven subscriber on stderr if none is set, so
/// stdout stays reserved for status and summary output. Without `RUST_LOG`,
/// config warnings and per-clear completions are shown at `info`.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(
            env_filter().max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::INFO)
        );
    }
}
