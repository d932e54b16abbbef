//! Settings context for IMPCTON Rewards.
//!
//! The resolved settings are provided once by `App` and read by any
//! component through [`use_settings`].

use dioxus::prelude::*;
use impcton_core::RewardsConfig;

/// Startup settings shared with every component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    /// Endpoint, timings and thresholds
    pub config: RewardsConfig,
    /// Serve a demo profile instead of calling the endpoint
    pub offline: bool,
}

/// Hook to access the startup settings from context.
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}
