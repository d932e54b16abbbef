//! Button Components
//!
//! - Contained: filled primary action
//! - Accent: filled secondary action
//! - Outlined: bordered, lower emphasis
//! - Text: borderless, for dialog actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled with the primary color
    #[default]
    Contained,
    /// Filled with the accent color
    Accent,
    /// Transparent with a primary border
    Outlined,
    /// Transparent, no border
    Text,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn-contained",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Outlined => "btn-outlined",
            ButtonVariant::Text => "btn-text",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Combine a variant's base class with any extra classes
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("btn {} {}", variant.class(), extra),
        None => format!("btn {}", variant.class()),
    }
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Accent,
///         onclick: move |_| connect_wallet(),
///         "Connect Wallet"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if props.disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
