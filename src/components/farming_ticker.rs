//! Drives token farming while mounted.

use std::time::Duration;

use dioxus::prelude::*;
use impcton_core::FarmingTimer;

/// Invisible component that calls `on_tick` once per `interval`.
///
/// The timer lives inside this component's future. Unmounting drops the
/// future, which drops the timer and aborts its task; remounting starts a
/// fresh timer.
#[component]
pub fn FarmingTicker(interval: Duration, on_tick: EventHandler<()>) -> Element {
    use_future(move || async move {
        let mut timer = FarmingTimer::start(interval);
        while timer.next_tick().await.is_some() {
            on_tick.call(());
        }
    });

    rsx! {}
}
