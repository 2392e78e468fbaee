//! Queue configuration and its two source formats.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LfgError, PlayerCounts};

/// Largest supported instance count.
pub const MAX_INSTANCES_LIMIT: u32 = 1000;
/// Largest supported clear time, in seconds.
pub const MAX_CLEAR_TIME_LIMIT: u32 = 15;

/// Immutable configuration snapshot for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LfgConfig {
    /// Instances available concurrently (`n`).
    pub max_instances: u32,
    /// Tank players in the queue (`t`).
    pub num_tanks: u32,
    /// Healer players in the queue (`h`).
    pub num_healers: u32,
    /// DPS players in the queue (`d`).
    pub num_dps: u32,
    /// Minimum clear time in seconds (`t1`).
    pub min_clear_time: u32,
    /// Maximum clear time in seconds (`t2`).
    pub max_clear_time: u32,
}

impl Default for LfgConfig {
    fn default() -> Self {
        Self {
            max_instances: 3,
            num_tanks: 10,
            num_healers: 10,
            num_dps: 10,
            min_clear_time: 5,
            max_clear_time: 15,
        }
    }
}

impl LfgConfig {
    /// Players available for party formation.
    #[must_use]
    pub const fn players(&self) -> PlayerCounts {
        PlayerCounts::new(self.num_tanks, self.num_healers, self.num_dps)
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::InvalidConfig` naming the first offending value.
    pub fn validate(&self) -> Result<(), LfgError> {
        if self.max_instances == 0 {
            return Err(LfgError::InvalidConfig(
                "max_instances must be greater than 0".into(),
            ));
        }
        if self.max_instances > MAX_INSTANCES_LIMIT {
            return Err(LfgError::InvalidConfig(format!(
                "max_instances must be at most {MAX_INSTANCES_LIMIT}"
            )));
        }
        if self.max_clear_time > MAX_CLEAR_TIME_LIMIT {
            return Err(LfgError::InvalidConfig(format!(
                "max_clear_time must be at most {MAX_CLEAR_TIME_LIMIT}"
            )));
        }
        if self.min_clear_time > self.max_clear_time {
            return Err(LfgError::InvalidConfig(
                "min_clear_time must not exceed max_clear_time".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `LfgError::ConfigParse` for malformed JSON and
    /// `LfgError::InvalidConfig` for out-of-range values.
    pub fn from_json_str(input: &str) -> Result<Self, LfgError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| LfgError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse the line-oriented `key value` format.
    ///
    /// Keys are `n`, `t`, `h`, `d`, `t1` and `t2`. Malformed lines, unknown or
    /// repeated keys and non-numeric values are skipped with a warning. A `t2`
    /// above the limit is clamped to it, a `t1` above `t2` is clamped to `t2`,
    /// and keys never set keep their defaults.
    #[must_use]
    pub fn from_text(input: &str) -> Self {
        let mut cfg = Self::default();
        let mut seen = HashSet::new();

        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [key, raw] = parts.as_slice() else {
                warn!(line, "invalid config line, expected `key value`");
                continue;
            };
            let Ok(value) = raw.parse::<u32>() else {
                warn!(key, value = raw, "invalid config value, expected unsigned integer");
                continue;
            };
            let slot = match *key {
                "n" => &mut cfg.max_instances,
                "t" => &mut cfg.num_tanks,
                "h" => &mut cfg.num_healers,
                "d" => &mut cfg.num_dps,
                "t1" => &mut cfg.min_clear_time,
                "t2" => &mut cfg.max_clear_time,
                _ => {
                    warn!(key, "unknown config key");
                    continue;
                }
            };
            if !seen.insert(*key) {
                warn!(key, "duplicate config key ignored");
                continue;
            }
            *slot = value;
        }

        if cfg.max_clear_time > MAX_CLEAR_TIME_LIMIT {
            warn!(
                t2 = cfg.max_clear_time,
                limit = MAX_CLEAR_TIME_LIMIT,
                "t2 above limit, clamping"
            );
            cfg.max_clear_time = MAX_CLEAR_TIME_LIMIT;
        }
        if cfg.min_clear_time > cfg.max_clear_time {
            warn!(
                t1 = cfg.min_clear_time,
                t2 = cfg.max_clear_time,
                "t1 above t2, setting t1 = t2"
            );
            cfg.min_clear_time = cfg.max_clear_time;
        }
        cfg
    }
}
