//! Scheduler configuration.
//!
//! The defaults are the classic SM-2 constants. A `config.toml`-style table
//! can override them; missing keys fall back to the defaults.

use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};

// ==================== SM-2 Constants ====================

/// Easiness factor never drops below this value
pub const MIN_EASINESS: f64 = 1.3;

/// Easiness factor of a freshly introduced card
pub const INITIAL_EASINESS: f64 = 2.5;

/// Interval after the first successful recall
pub const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second consecutive successful recall
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Interval after a lapse
pub const LAPSE_INTERVAL_DAYS: u32 = 1;

// ==================== Config ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub minimum_easiness: f64,
    pub initial_easiness: f64,
    pub first_interval_days: u32,
    pub second_interval_days: u32,
    pub lapse_interval_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            minimum_easiness: MIN_EASINESS,
            initial_easiness: INITIAL_EASINESS,
            first_interval_days: FIRST_INTERVAL_DAYS,
            second_interval_days: SECOND_INTERVAL_DAYS,
            lapse_interval_days: LAPSE_INTERVAL_DAYS,
        }
    }
}

impl SchedulerConfig {
    /// Parses a TOML table and validates the result.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SchedulerConfig = toml::from_str(contents)?;
        config.validate()?;
        tracing::debug!(?config, "Loaded scheduler config");
        Ok(config)
    }

    /// Checks that the values keep every `ReviewState` invariant reachable.
    pub fn validate(&self) -> Result<()> {
        // The floor may be raised but never lowered below the SM-2 minimum.
        if !self.minimum_easiness.is_finite() || self.minimum_easiness < MIN_EASINESS {
            return Err(SchedulerError::InvalidConfig(format!(
                "minimum_easiness must be a finite value >= {}, got {}",
                MIN_EASINESS, self.minimum_easiness
            )));
        }
        if !self.initial_easiness.is_finite() || self.initial_easiness < self.minimum_easiness {
            return Err(SchedulerError::InvalidConfig(format!(
                "initial_easiness ({}) must be >= minimum_easiness ({})",
                self.initial_easiness, self.minimum_easiness
            )));
        }

        let intervals = [
            ("first_interval_days", self.first_interval_days),
            ("second_interval_days", self.second_interval_days),
            ("lapse_interval_days", self.lapse_interval_days),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, days)| *days == 0) {
            return Err(SchedulerError::InvalidConfig(format!(
                "{} must be at least 1 day",
                name
            )));
        }
        if self.second_interval_days < self.first_interval_days {
            return Err(SchedulerError::InvalidConfig(format!(
                "second_interval_days ({}) must be >= first_interval_days ({})",
                self.second_interval_days, self.first_interval_days
            )));
        }

        Ok(())
    }
}
