//! Indeterminate progress indicator.

use dioxus::prelude::*;

/// Spinning ring shown while the profile loads
#[component]
pub fn Spinner(
    /// Accessible description of what is loading
    #[props(default = "Loading".to_string())]
    label: String,
) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "progressbar",
            "aria-label": "{label}",
            div { class: "spinner-ring" }
        }
    }
}
