//! Snackbar-style toast.

use dioxus::prelude::*;

/// Bottom toast with a single line of text.
///
/// The caller owns the open flag and the auto-hide timer; clicking the
/// toast calls `on_close` early.
#[component]
pub fn Toast(open: bool, message: String, on_close: EventHandler<()>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast",
            role: "status",
            "aria-live": "polite",
            onclick: move |_| on_close.call(()),
            span { class: "toast-message", "{message}" }
        }
    }
}
