//! Referral code entry.

use dioxus::prelude::*;
use impcton_ui::{Button, ButtonVariant, TextField};

/// Text field plus "Apply Referral", disabled while the field is empty.
#[component]
pub fn ReferralSection(
    code: String,
    can_apply: bool,
    on_edit: EventHandler<String>,
    on_apply: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "referral-section",
            TextField {
                id: "referral-code".to_string(),
                label: "Referral Code".to_string(),
                value: code,
                oninput: move |value: String| on_edit.call(value),
            }
            Button {
                variant: ButtonVariant::Outlined,
                disabled: !can_apply,
                onclick: move |_| on_apply.call(()),
                "Apply Referral"
            }
        }
    }
}
