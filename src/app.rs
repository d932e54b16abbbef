use std::rc::Rc;

use dioxus::prelude::*;
use impcton_core::ReadyOnce;

use crate::context::Settings;
use crate::get_settings;
use crate::host::TelegramWebApp;
use crate::pages::RewardsPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and settings, and tells the host the app is
/// ready on first mount.
#[component]
pub fn App() -> Element {
    use_context_provider::<Settings>(get_settings);

    let host = use_hook(|| Rc::new(ReadyOnce::new(TelegramWebApp)));
    use_effect(move || {
        host.signal();
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        RewardsPage {}
    }
}
