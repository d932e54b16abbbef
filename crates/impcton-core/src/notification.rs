//! Transient toast notification state.

/// Shown after the upgrade dialog is confirmed
pub const UPGRADE_SUCCESS: &str = "Upgrade successful!";

/// Shown after "Connect Wallet"
pub const WALLET_CONNECTED: &str = "Wallet connected successfully!";

/// Message shown after a referral code is applied
pub fn referral_applied(code: &str) -> String {
    format!("Referral code {} applied!", code)
}

/// A single toast slot. Each `show` overwrites the previous message and
/// bumps the generation, so a dismissal scheduled for an older toast can be
/// told apart from one for the current toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    open: bool,
    message: String,
    generation: u64,
}

impl Notification {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open the toast with a new message. Returns its generation.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = message.into();
        self.open = true;
        self.generation
    }

    /// Close the toast if it is still the one identified by `generation`.
    ///
    /// Returns whether the toast was closed.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.open && self.generation == generation {
            self.open = false;
            true
        } else {
            false
        }
    }
}
