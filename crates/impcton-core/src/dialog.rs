//! Upgrade confirmation dialog.

/// Visibility of the upgrade dialog.
///
/// `Closed -> Open` needs enough tokens; `Open -> Closed` happens on either
/// confirm or cancel. Confirming has no effect on the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpgradeDialog {
    #[default]
    Closed,
    Open,
}

impl UpgradeDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, UpgradeDialog::Open)
    }

    /// Whether a balance is enough to open the dialog
    pub fn can_open(tokens: u32, cost: u32) -> bool {
        tokens >= cost
    }

    /// Open the dialog if the balance allows it. Returns whether it opened.
    pub fn open(&mut self, tokens: u32, cost: u32) -> bool {
        if *self == UpgradeDialog::Closed && Self::can_open(tokens, cost) {
            *self = UpgradeDialog::Open;
            true
        } else {
            false
        }
    }

    /// Close after confirmation. Returns whether the dialog was open.
    pub fn confirm(&mut self) -> bool {
        self.close()
    }

    /// Close without confirming. Returns whether the dialog was open.
    pub fn cancel(&mut self) -> bool {
        self.close()
    }

    fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = UpgradeDialog::Closed;
        was_open
    }
}
