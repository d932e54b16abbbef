//! Rewards page - profile, farmed balance and the three stub actions.
//!
//! All page state sits in one `Signal<RewardsState>`; handlers go through
//! [`dispatch`], which also schedules the notification auto-dismiss.

use std::time::Duration;

use dioxus::prelude::*;
use impcton_core::{
    load_profile, Action, Effect, HttpProfileSource, LoadError, RewardsState, RewardsView,
    StaticProfileSource, UserProfile,
};
use impcton_ui::{Button, ButtonVariant, Spinner, Toast};

use crate::components::{FarmingTicker, ReferralSection, UpgradeConfirm, UserInfo};
use crate::context::{use_settings, Settings};

/// Simulated latency for the offline demo profile
const OFFLINE_DELAY: Duration = Duration::from_millis(800);

fn demo_profile() -> UserProfile {
    UserProfile::new("Ana", 2, 95)
}

/// Apply an action and run its effect.
///
/// Dismiss timers are spawned on the current scope, so they die with the page.
fn dispatch(mut state: Signal<RewardsState>, action: Action) {
    let effect = state.write().update(action);
    if let Some(Effect::ScheduleDismiss { generation, after }) = effect {
        spawn(async move {
            tokio::time::sleep(after).await;
            state.write().update(Action::DismissNotification(generation));
        });
    }
}

/// Fetch the profile from the configured source
async fn fetch(settings: &Settings) -> Result<UserProfile, LoadError> {
    if settings.offline {
        let source = StaticProfileSource::profile(demo_profile()).with_delay(OFFLINE_DELAY);
        return load_profile(&source).await;
    }

    match HttpProfileSource::new(&settings.config) {
        Ok(source) => load_profile(&source).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            Err(LoadError)
        }
    }
}

/// Rewards page component.
#[component]
pub fn RewardsPage() -> Element {
    let settings = use_settings();
    let state = use_signal(|| RewardsState::new(&settings.config));

    // Load the profile once on mount. The task belongs to this scope and is
    // dropped with it, so an unmount mid-request cancels the request.
    let load_settings = settings.clone();
    use_hook(move || {
        spawn(async move {
            let action = match fetch(&load_settings).await {
                Ok(profile) => Action::ProfileLoaded(profile),
                Err(e) => Action::ProfileFailed(e),
            };
            dispatch(state, action);
        })
    });

    let current = state.read().clone();

    let body = match current.view() {
        RewardsView::Loading => rsx! {
            div { class: "page-centered",
                Spinner { label: "Loading profile".to_string() }
            }
        },
        RewardsView::Error(message) => rsx! {
            div { class: "page-centered",
                div { class: "error-text", "Error: {message}" }
            }
        },
        RewardsView::Ready { profile, counter } => rsx! {
            FarmingTicker {
                interval: settings.config.farm_interval(),
                on_tick: move |_| dispatch(state, Action::FarmTick),
            }

            UserInfo {
                name: profile.display_name().to_string(),
                level: profile.display_level(),
                tokens: counter.tokens(),
                ceiling: counter.ceiling(),
            }

            div { class: "action-row",
                Button {
                    variant: ButtonVariant::Contained,
                    disabled: !current.can_upgrade(),
                    onclick: move |_| dispatch(state, Action::OpenUpgrade),
                    "Upgrade"
                }
                Button {
                    variant: ButtonVariant::Accent,
                    onclick: move |_| dispatch(state, Action::ConnectWallet),
                    "Connect Wallet"
                }
            }

            ReferralSection {
                code: current.referral_code().to_string(),
                can_apply: current.can_apply_referral(),
                on_edit: move |code: String| dispatch(state, Action::EditReferral(code)),
                on_apply: move |_| dispatch(state, Action::ApplyReferral),
            }

            UpgradeConfirm {
                open: current.dialog().is_open(),
                cost: current.upgrade_cost(),
                on_confirm: move |_| dispatch(state, Action::ConfirmUpgrade),
                on_cancel: move |_| dispatch(state, Action::CancelUpgrade),
            }
        },
    };

    let notification = current.notification();
    let generation = notification.generation();

    rsx! {
        main { class: "impcton-rewards",
            h1 { class: "page-title", "IMPCTON Rewards" }
            {body}
            Toast {
                open: notification.is_open(),
                message: notification.message().to_string(),
                on_close: move |_| dispatch(state, Action::DismissNotification(generation)),
            }
        }
    }
}
