//! Integration with the embedding host (the Telegram client).

use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle calls into the host application
pub trait HostBridge {
    /// Tell the host the app is ready to be displayed
    fn ready(&self);
}

/// Wraps a bridge so the ready signal reaches the host at most once,
/// however many times the view re-renders.
#[derive(Debug, Default)]
pub struct ReadyOnce<H> {
    host: H,
    signalled: AtomicBool,
}

impl<H: HostBridge> ReadyOnce<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            signalled: AtomicBool::new(false),
        }
    }

    /// Signal readiness. Returns `true` only for the call that reached the host.
    pub fn signal(&self) -> bool {
        if self.signalled.swap(true, Ordering::AcqRel) {
            return false;
        }
        tracing::debug!("Signalling ready to host");
        self.host.ready();
        true
    }

    pub fn is_signalled(&self) -> bool {
        self.signalled.load(Ordering::Acquire)
    }

    #[cfg(test)]
    fn host(&self) -> &H {
        &self.host
    }
}
