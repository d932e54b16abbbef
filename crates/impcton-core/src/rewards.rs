//! Rewards page state and its reducer.
//!
//! All page state lives in one [`RewardsState`] value. The view feeds it
//! [`Action`]s through [`RewardsState::update`] and carries out the returned
//! [`Effect`], if any.

use std::time::Duration;

use crate::config::RewardsConfig;
use crate::dialog::UpgradeDialog;
use crate::farming::FarmingCounter;
use crate::loader::LoadError;
use crate::notification::{self, Notification};
use crate::types::UserProfile;

/// What the page body shows.
///
/// `Loading` moves to `Ready` or `Error` once; neither moves anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardsView {
    Loading,
    Error(String),
    Ready {
        profile: UserProfile,
        counter: FarmingCounter,
    },
}

/// Everything that can happen on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ProfileLoaded(UserProfile),
    ProfileFailed(LoadError),
    FarmTick,
    OpenUpgrade,
    CancelUpgrade,
    ConfirmUpgrade,
    ConnectWallet,
    EditReferral(String),
    ApplyReferral,
    DismissNotification(u64),
}

/// Work the view must schedule after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send `DismissNotification(generation)` after `after` elapses
    ScheduleDismiss { generation: u64, after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsState {
    view: RewardsView,
    dialog: UpgradeDialog,
    notification: Notification,
    referral_code: String,
    token_ceiling: u32,
    upgrade_cost: u32,
    notification_timeout: Duration,
}

impl RewardsState {
    pub fn new(config: &RewardsConfig) -> Self {
        Self {
            view: RewardsView::Loading,
            dialog: UpgradeDialog::default(),
            notification: Notification::default(),
            referral_code: String::new(),
            token_ceiling: config.token_ceiling,
            upgrade_cost: config.upgrade_cost,
            notification_timeout: config.notification_timeout(),
        }
    }

    pub fn view(&self) -> &RewardsView {
        &self.view
    }

    pub fn dialog(&self) -> UpgradeDialog {
        self.dialog
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn referral_code(&self) -> &str {
        &self.referral_code
    }

    pub fn upgrade_cost(&self) -> u32 {
        self.upgrade_cost
    }

    /// Current farmed balance, `None` until the profile is ready
    pub fn tokens(&self) -> Option<u32> {
        match &self.view {
            RewardsView::Ready { counter, .. } => Some(counter.tokens()),
            _ => None,
        }
    }

    pub fn can_upgrade(&self) -> bool {
        self.tokens()
            .is_some_and(|tokens| UpgradeDialog::can_open(tokens, self.upgrade_cost))
    }

    pub fn can_apply_referral(&self) -> bool {
        !self.referral_code.is_empty()
    }

    /// Apply an action. Returns the effect the view must run, if any.
    pub fn update(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::ProfileLoaded(profile) => {
                if self.view == RewardsView::Loading {
                    let counter =
                        FarmingCounter::with_ceiling(profile.seed_tokens(), self.token_ceiling);
                    self.view = RewardsView::Ready { profile, counter };
                } else {
                    tracing::debug!("Ignoring profile after initial load");
                }
                None
            }
            Action::ProfileFailed(err) => {
                if self.view == RewardsView::Loading {
                    self.view = RewardsView::Error(err.message().to_string());
                }
                None
            }
            Action::FarmTick => {
                if let RewardsView::Ready { counter, .. } = &mut self.view {
                    let tokens = counter.tick();
                    tracing::trace!(tokens, "Farmed");
                }
                None
            }
            Action::OpenUpgrade => {
                if let Some(tokens) = self.tokens() {
                    self.dialog.open(tokens, self.upgrade_cost);
                }
                None
            }
            Action::CancelUpgrade => {
                self.dialog.cancel();
                None
            }
            Action::ConfirmUpgrade => {
                if self.dialog.confirm() {
                    tracing::info!("Upgrade confirmed");
                    self.notify(notification::UPGRADE_SUCCESS)
                } else {
                    None
                }
            }
            Action::ConnectWallet => {
                tracing::info!("Wallet connect requested");
                self.notify(notification::WALLET_CONNECTED)
            }
            Action::EditReferral(code) => {
                self.referral_code = code;
                None
            }
            Action::ApplyReferral => {
                if !self.can_apply_referral() {
                    return None;
                }
                tracing::info!(code = %self.referral_code, "Referral code applied");
                let message = notification::referral_applied(&self.referral_code);
                self.notify(message)
            }
            Action::DismissNotification(generation) => {
                self.notification.dismiss(generation);
                None
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>) -> Option<Effect> {
        let generation = self.notification.show(message);
        Some(Effect::ScheduleDismiss {
            generation,
            after: self.notification_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{UPGRADE_SUCCESS, WALLET_CONNECTED};

    fn ready_state(tokens: u32) -> RewardsState {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 2, tokens)));
        state
    }

    #[test]
    fn starts_loading() {
        let state = RewardsState::new(&RewardsConfig::default());
        assert_eq!(state.view(), &RewardsView::Loading);
        assert_eq!(state.tokens(), None);
        assert!(!state.can_upgrade());
    }

    #[test]
    fn load_then_ready_once() {
        let mut state = ready_state(95);
        assert_eq!(state.tokens(), Some(95));

        state.update(Action::ProfileLoaded(UserProfile::new("Other", 9, 500)));
        state.update(Action::ProfileFailed(LoadError));
        match state.view() {
            RewardsView::Ready { profile, .. } => assert_eq!(profile.display_name(), "Ana"),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn failure_is_terminal() {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileFailed(LoadError));
        assert_eq!(
            state.view(),
            &RewardsView::Error("Failed to fetch user data".to_string())
        );

        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 2, 95)));
        state.update(Action::FarmTick);
        assert!(matches!(state.view(), RewardsView::Error(_)));
    }

    #[test]
    fn ticks_before_ready_are_ignored() {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::FarmTick);
        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 2, 10)));
        assert_eq!(state.tokens(), Some(10));
    }

    #[test]
    fn missing_tokens_seed_zero() {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileLoaded(UserProfile {
            name: Some("Ana".into()),
            ..Default::default()
        }));
        assert_eq!(state.tokens(), Some(0));
    }

    #[test]
    fn seed_95_reaches_upgrade_after_five_ticks() {
        let mut state = ready_state(95);

        state.update(Action::FarmTick);
        assert_eq!(state.tokens(), Some(96));
        assert!(!state.can_upgrade());

        for _ in 0..4 {
            state.update(Action::FarmTick);
        }
        assert_eq!(state.tokens(), Some(100));
        assert!(state.can_upgrade());
    }

    #[test]
    fn upgrade_needs_cost() {
        let mut state = ready_state(99);
        state.update(Action::OpenUpgrade);
        assert!(!state.dialog().is_open());

        let mut state = ready_state(100);
        state.update(Action::OpenUpgrade);
        assert!(state.dialog().is_open());
    }

    #[test]
    fn confirm_closes_and_notifies_without_deducting() {
        let mut state = ready_state(150);
        state.update(Action::OpenUpgrade);
        let effect = state.update(Action::ConfirmUpgrade);

        assert!(!state.dialog().is_open());
        assert!(state.notification().is_open());
        assert_eq!(state.notification().message(), UPGRADE_SUCCESS);
        assert_eq!(state.tokens(), Some(150));
        assert_eq!(
            effect,
            Some(Effect::ScheduleDismiss {
                generation: state.notification().generation(),
                after: Duration::from_millis(6_000),
            })
        );
    }

    #[test]
    fn cancel_closes_silently() {
        let mut state = ready_state(150);
        state.update(Action::OpenUpgrade);
        assert_eq!(state.update(Action::CancelUpgrade), None);
        assert!(!state.dialog().is_open());
        assert!(!state.notification().is_open());
    }

    #[test]
    fn confirm_while_closed_does_nothing() {
        let mut state = ready_state(150);
        assert_eq!(state.update(Action::ConfirmUpgrade), None);
        assert!(!state.notification().is_open());
    }

    #[test]
    fn wallet_connect_notifies() {
        let mut state = ready_state(0);
        assert!(state.update(Action::ConnectWallet).is_some());
        assert_eq!(state.notification().message(), WALLET_CONNECTED);
    }

    #[test]
    fn referral_requires_code() {
        let mut state = ready_state(0);
        assert!(!state.can_apply_referral());
        assert_eq!(state.update(Action::ApplyReferral), None);
        assert!(!state.notification().is_open());

        state.update(Action::EditReferral("FRIEND-7".into()));
        assert!(state.can_apply_referral());
        state.update(Action::ApplyReferral);
        assert!(state.notification().message().contains("FRIEND-7"));
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        let mut state = ready_state(0);
        let first = match state.update(Action::ConnectWallet) {
            Some(Effect::ScheduleDismiss { generation, .. }) => generation,
            None => panic!("expected effect"),
        };
        state.update(Action::EditReferral("X".into()));
        state.update(Action::ApplyReferral);

        state.update(Action::DismissNotification(first));
        assert!(state.notification().is_open());
        assert_eq!(state.notification().message(), "Referral code X applied!");
    }
}
