//! Profile and balance panel.

use dioxus::prelude::*;

/// Share of the ceiling farmed so far, in whole percent
pub fn progress_percent(tokens: u32, ceiling: u32) -> u32 {
    if ceiling == 0 {
        return 100;
    }
    ((u64::from(tokens.min(ceiling)) * 100) / u64::from(ceiling)) as u32
}

/// Greeting, balance with farming progress, and level.
#[component]
pub fn UserInfo(name: String, level: String, tokens: u32, ceiling: u32) -> Element {
    let percent = progress_percent(tokens, ceiling);
    let status = if tokens >= ceiling { "Storage full" } else { "Farming..." };

    rsx! {
        section { class: "user-info",
            p { class: "greeting", "Welcome, {name}!" }
            p { class: "token-balance", "Tokens: {tokens}" }
            div {
                class: "farm-progress",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "{ceiling}",
                "aria-valuenow": "{tokens}",
                div { class: "farm-progress-fill", style: "width: {percent}%;" }
            }
            p { class: "farm-status", "{status}" }
            p { class: "level", "Level: {level}" }
        }
    }
}
