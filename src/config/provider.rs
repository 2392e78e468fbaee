//! Configuration providers: where a run's [`LfgConfig`] comes from, and where
//! the leftover player counts go once parties are formed.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::config::LfgConfig;
use crate::core::{LfgError, PlayerCounts};

/// Supplies a validated configuration and receives the post-formation leftovers.
pub trait ConfigProvider: Send + Sync {
    /// Load and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or holds invalid values.
    fn load(&self) -> Result<LfgConfig, LfgError>;

    /// Record players that could not be placed in a party. Called once per run,
    /// before any worker starts.
    fn update_players(&self, leftover: PlayerCounts);

    /// Leftover players recorded by [`Self::update_players`], if any.
    fn remaining_players(&self) -> Option<PlayerCounts>;
}

/// Provider backed by an in-memory configuration.
#[derive(Debug)]
pub struct StaticConfigProvider {
    config: LfgConfig,
    leftover: Mutex<Option<PlayerCounts>>,
}

impl StaticConfigProvider {
    /// Wrap an existing configuration.
    #[must_use]
    pub const fn new(config: LfgConfig) -> Self {
        Self {
            config,
            leftover: Mutex::new(None),
        }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn load(&self) -> Result<LfgConfig, LfgError> {
        self.config.validate()?;
        Ok(self.config)
    }

    fn update_players(&self, leftover: PlayerCounts) {
        *self.leftover.lock() = Some(leftover);
    }

    fn remaining_players(&self) -> Option<PlayerCounts> {
        *self.leftover.lock()
    }
}

/// Provider reading a configuration file.
///
/// Files ending in `.json` are parsed as JSON; anything else uses the
/// line-oriented `key value` format. A missing or unreadable file yields the
/// defaults.
#[derive(Debug)]
pub struct FileConfigProvider {
    path: PathBuf,
    leftover: Mutex<Option<PlayerCounts>>,
}

impl FileConfigProvider {
    /// Provider for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            leftover: Mutex::new(None),
        }
    }

    /// Path this provider reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> Result<LfgConfig, LfgError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "config file not found, using defaults");
                return Ok(LfgConfig::default());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "config file unreadable, using defaults");
                return Ok(LfgConfig::default());
            }
        };

        info!(path = %self.path.display(), "loading configuration");
        if self.is_json() {
            LfgConfig::from_json_str(&contents)
        } else {
            let cfg = LfgConfig::from_text(&contents);
            cfg.validate()?;
            Ok(cfg)
        }
    }

    fn update_players(&self, leftover: PlayerCounts) {
        *self.leftover.lock() = Some(leftover);
    }

    fn remaining_players(&self) -> Option<PlayerCounts> {
        *self.leftover.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_records_leftover() {
        let provider = StaticConfigProvider::new(LfgConfig::default());
        assert_eq!(provider.load().unwrap(), LfgConfig::default());
        assert_eq!(provider.remaining_players(), None);

        provider.update_players(PlayerCounts::new(7, 7, 1));
        assert_eq!(provider.remaining_players(), Some(PlayerCounts::new(7, 7, 1)));
    }

    #[test]
    fn test_static_provider_validates() {
        let provider = StaticConfigProvider::new(LfgConfig {
            max_instances: 0,
            ..LfgConfig::default()
        });
        assert!(matches!(provider.load(), Err(LfgError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let provider = FileConfigProvider::new("/nonexistent/lfg/config.txt");
        assert_eq!(provider.load().unwrap(), LfgConfig::default());
    }
}
