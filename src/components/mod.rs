//! Feature components for the rewards page.

mod farming_ticker;
mod referral_section;
mod upgrade_confirm;
mod user_info;

pub use farming_ticker::FarmingTicker;
pub use referral_section::ReferralSection;
pub use upgrade_confirm::UpgradeConfirm;
pub use user_info::UserInfo;
