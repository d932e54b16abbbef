//! IMPCTON Rewards Core Library
//!
//! State and services behind the IMPCTON Rewards page: a user profile
//! loaded once, a token counter farmed on a timer, and the stub upgrade,
//! wallet and referral actions that only raise notifications.
//!
//! ## Quick Start
//!
//! ```ignore
//! use impcton_core::{load_profile, Action, HttpProfileSource, RewardsConfig, RewardsState};
//!
//! let config = RewardsConfig::default();
//! let mut state = RewardsState::new(&config);
//!
//! let source = HttpProfileSource::new(&config)?;
//! match load_profile(&source).await {
//!     Ok(profile) => state.update(Action::ProfileLoaded(profile)),
//!     Err(e) => state.update(Action::ProfileFailed(e)),
//! };
//! ```

pub mod config;
pub mod dialog;
pub mod error;
pub mod farming;
pub mod host;
pub mod loader;
pub mod notification;
pub mod rewards;
pub mod types;

// Re-exports
pub use config::RewardsConfig;
pub use dialog::UpgradeDialog;
pub use error::{RewardsError, RewardsResult};
pub use farming::{FarmingCounter, FarmingTimer};
pub use host::{HostBridge, ReadyOnce};
pub use loader::{
    load_profile, HttpProfileSource, LoadError, ProfileSource, StaticProfileSource,
    PROFILE_FETCH_FAILED,
};
pub use notification::Notification;
pub use rewards::{Action, Effect, RewardsState, RewardsView};
pub use types::UserProfile;
