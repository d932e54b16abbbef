//! Telegram Mini App host bridge.

use dioxus::prelude::*;
use impcton_core::HostBridge;

/// Calls `Telegram.WebApp.ready()` when the page runs inside Telegram.
/// Resolves to whether the host was found.
const READY_SCRIPT: &str = r#"
if (window.Telegram && window.Telegram.WebApp) {
    window.Telegram.WebApp.ready();
    return true;
}
return false;
"#;

/// Bridge to the Telegram WebApp object injected by the client
#[derive(Debug, Default, Clone, Copy)]
pub struct TelegramWebApp;

impl HostBridge for TelegramWebApp {
    fn ready(&self) {
        let eval = document::eval(READY_SCRIPT);
        spawn(async move {
            match eval.await {
                Ok(found) if found.as_bool() == Some(true) => {
                    tracing::info!("Signalled ready to Telegram host");
                }
                Ok(_) => {
                    tracing::debug!("Telegram WebApp not present, ready signal skipped");
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Failed to signal ready to host");
                }
            }
        });
    }
}
