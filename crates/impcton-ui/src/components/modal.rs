//! Modal dialog shell.

use dioxus::prelude::*;

/// Modal dialog over a dimmed backdrop.
///
/// Clicking the backdrop calls `on_close`; clicks inside the panel do not.
/// Renders nothing while `open` is false.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         open: dialog_open(),
///         on_close: move |_| dialog_open.set(false),
///         h2 { "Upgrade Your Account" }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether the dialog is visible
    open: bool,
    /// Called on backdrop click
    on_close: EventHandler<()>,
    /// Optional additional CSS classes for the panel
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let panel_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal-panel {}", extra),
        _ => "modal-panel".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                {children}
            }
        }
    }
}
