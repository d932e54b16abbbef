//! Runtime configuration for IMPCTON Rewards.
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides:
//!
//! ```json
//! { "profile_url": "http://localhost:8080/user-data", "farm_interval_ms": 1000 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RewardsError, RewardsResult};

/// Profile endpoint used when no override is given
pub const DEFAULT_PROFILE_URL: &str = "https://api.example.com/user-data";

/// Milliseconds between farming ticks
pub const DEFAULT_FARM_INTERVAL_MS: u64 = 5_000;

/// Highest balance the farming counter can reach
pub const DEFAULT_TOKEN_CEILING: u32 = 1_000;

/// Balance required before the upgrade dialog can be opened
pub const DEFAULT_UPGRADE_COST: u32 = 100;

/// How long a notification stays visible
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 6_000;

/// Profile request timeout
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub profile_url: String,
    pub farm_interval_ms: u64,
    pub token_ceiling: u32,
    pub upgrade_cost: u32,
    pub notification_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            farm_interval_ms: DEFAULT_FARM_INTERVAL_MS,
            token_ceiling: DEFAULT_TOKEN_CEILING,
            upgrade_cost: DEFAULT_UPGRADE_COST,
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl RewardsConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> RewardsResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config file");
        Ok(config)
    }

    /// Reject values that would break the counter or the loader
    pub fn validate(&self) -> RewardsResult<()> {
        if self.profile_url.trim().is_empty() {
            return Err(RewardsError::Config("profile_url must not be empty".into()));
        }
        if self.farm_interval_ms == 0 {
            return Err(RewardsError::Config(
                "farm_interval_ms must be positive".into(),
            ));
        }
        if self.notification_timeout_ms == 0 {
            return Err(RewardsError::Config(
                "notification_timeout_ms must be positive".into(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(RewardsError::Config(
                "request_timeout_ms must be positive".into(),
            ));
        }
        if self.upgrade_cost > self.token_ceiling {
            return Err(RewardsError::Config(format!(
                "upgrade_cost {} exceeds token_ceiling {}",
                self.upgrade_cost, self.token_ceiling
            )));
        }
        Ok(())
    }

    pub fn farm_interval(&self) -> Duration {
        Duration::from_millis(self.farm_interval_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
