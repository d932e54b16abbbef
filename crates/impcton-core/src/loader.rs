//! Profile loading.
//!
//! A [`ProfileSource`] produces the user record; [`load_profile`] runs it
//! once and collapses every failure into the single user-facing
//! [`LoadError`]. The underlying cause is logged, never shown.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::RewardsConfig;
use crate::error::{RewardsError, RewardsResult};
use crate::types::UserProfile;

/// The only error text the view ever shows
pub const PROFILE_FETCH_FAILED: &str = "Failed to fetch user data";

/// Profile fetch failed, for whatever reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to fetch user data")]
pub struct LoadError;

impl LoadError {
    pub fn message(&self) -> &'static str {
        PROFILE_FETCH_FAILED
    }
}

/// Anything that can produce a user profile
pub trait ProfileSource {
    fn fetch_profile(&self) -> impl Future<Output = RewardsResult<UserProfile>> + Send;
}

/// Fetch the profile once. No retry.
pub async fn load_profile<S: ProfileSource>(source: &S) -> Result<UserProfile, LoadError> {
    match source.fetch_profile().await {
        Ok(profile) => {
            tracing::info!(
                name = profile.display_name(),
                tokens = profile.seed_tokens(),
                "Profile loaded"
            );
            Ok(profile)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Profile fetch failed");
            Err(LoadError)
        }
    }
}

/// Fetches the profile over HTTP with a single `GET`.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProfileSource {
    pub fn new(config: &RewardsConfig) -> RewardsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            url: config.profile_url.clone(),
        })
    }

    #[cfg(test)]
    fn url(&self) -> &str {
        &self.url
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self) -> RewardsResult<UserProfile> {
        tracing::debug!(url = %self.url, "Requesting profile");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RewardsError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Canned profile source for offline mode and tests.
#[derive(Debug, Clone)]
pub struct StaticProfileSource {
    outcome: Result<UserProfile, u16>,
    delay: Duration,
}

impl StaticProfileSource {
    /// Always resolves with `profile`
    pub fn profile(profile: UserProfile) -> Self {
        Self {
            outcome: Ok(profile),
            delay: Duration::ZERO,
        }
    }

    /// Always fails as if the server answered with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
            delay: Duration::ZERO,
        }
    }

    /// Simulate network latency before resolving
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl ProfileSource for StaticProfileSource {
    async fn fetch_profile(&self) -> RewardsResult<UserProfile> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.outcome {
            Ok(profile) => Ok(profile.clone()),
            Err(status) => Err(RewardsError::Status(*status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_profile_loads() {
        let source = StaticProfileSource::profile(UserProfile::new("Ana", 2, 95));
        let profile = load_profile(&source).await.unwrap();
        assert_eq!(profile.seed_tokens(), 95);
    }

    #[tokio::test]
    async fn failure_collapses_to_fixed_message() {
        for status in [404, 500, 503] {
            let source = StaticProfileSource::failing(status);
            let err = load_profile(&source).await.unwrap_err();
            assert_eq!(err.to_string(), PROFILE_FETCH_FAILED);
            assert_eq!(err.message(), PROFILE_FETCH_FAILED);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_honoured() {
        let source = StaticProfileSource::profile(UserProfile::default())
            .with_delay(Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        load_profile(&source).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn http_source_uses_configured_url() {
        let config = RewardsConfig {
            profile_url: "http://localhost:1/user-data".to_string(),
            ..Default::default()
        };
        let source = HttpProfileSource::new(&config).unwrap();
        assert_eq!(source.url(), "http://localhost:1/user-data");
    }
}
