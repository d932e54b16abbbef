//! Token farming: a bounded counter and the timer that drives it.
//!
//! [`FarmingCounter`] is plain state; [`FarmingTimer`] is a tokio task that
//! emits one tick per interval. The owner of both applies each tick to the
//! counter, and dropping the timer ends the task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::DEFAULT_TOKEN_CEILING;

/// Shortest interval the timer accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Bounded, non-decreasing token balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmingCounter {
    tokens: u32,
    ceiling: u32,
}

impl FarmingCounter {
    /// Counter seeded from a balance, capped at the default ceiling
    pub fn new(seed: u32) -> Self {
        Self::with_ceiling(seed, DEFAULT_TOKEN_CEILING)
    }

    /// Counter with an explicit ceiling. A seed above the ceiling is clamped.
    pub fn with_ceiling(seed: u32, ceiling: u32) -> Self {
        Self {
            tokens: seed.min(ceiling),
            ceiling,
        }
    }

    pub fn tokens(&self) -> u32 {
        self.tokens
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn is_saturated(&self) -> bool {
        self.tokens >= self.ceiling
    }

    /// Farm one token. Returns the new balance.
    pub fn tick(&mut self) -> u32 {
        self.advance(1)
    }

    /// Farm `n` tokens at once, saturating at the ceiling
    pub fn advance(&mut self, n: u32) -> u32 {
        self.tokens = self.tokens.saturating_add(n).min(self.ceiling);
        self.tokens
    }
}

/// Repeating farming timer backed by a tokio task.
///
/// The first tick arrives one full interval after [`FarmingTimer::start`].
/// Late ticks are delayed rather than delivered in a burst.
#[derive(Debug)]
pub struct FarmingTimer {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl FarmingTimer {
    /// Spawn the timer on the current tokio runtime
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let (tx, ticks) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Farming timer started");

        Self { ticks, task }
    }

    /// Wait for the next tick. Returns `None` once the timer is cancelled.
    pub async fn next_tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    /// Stop emitting ticks. Pending and future `next_tick` calls return `None`,
    /// including for a tick already buffered before the call.
    pub fn cancel(&mut self) {
        if !self.task.is_finished() {
            self.task.abort();
            tracing::debug!("Farming timer cancelled");
        }
        self.ticks.close();
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for FarmingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
