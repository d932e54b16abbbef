//! Page components for IMPCTON Rewards.

mod rewards;

pub use rewards::RewardsPage;
