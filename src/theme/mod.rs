//! Visual theme for IMPCTON Rewards.

mod styles;

pub use styles::GLOBAL_STYLES;
