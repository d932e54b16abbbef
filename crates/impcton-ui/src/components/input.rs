//! Text field with a floating label.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Label shown above the field
    pub label: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// ID for label association
    pub id: String,
}

/// Single-line text input.
///
/// # Example
///
/// ```rust,ignore
/// let mut code = use_signal(String::new);
///
/// rsx! {
///     TextField {
///         id: "referral-code".to_string(),
///         label: "Referral Code".to_string(),
///         value: code(),
///         oninput: move |s| code.set(s),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let filled = if props.value.is_empty() { "" } else { " filled" };

    rsx! {
        div { class: "text-field{filled}",
            label {
                class: "text-field-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "text-field-input",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
