//! Upgrade confirmation dialog.

use dioxus::prelude::*;
use impcton_ui::{Button, ButtonVariant, Modal};

/// Asks the user to confirm the upgrade. Backdrop click counts as cancel.
#[component]
pub fn UpgradeConfirm(
    open: bool,
    cost: u32,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            open,
            on_close: move |_| on_cancel.call(()),
            class: "upgrade-dialog".to_string(),

            h2 { class: "modal-title", "Upgrade Your Account" }
            p { class: "modal-description",
                "Are you sure you want to upgrade? This will cost {cost} tokens."
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Text,
                    onclick: move |_| on_confirm.call(()),
                    "Confirm Upgrade"
                }
                Button {
                    variant: ButtonVariant::Text,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
