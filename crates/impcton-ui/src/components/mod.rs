//! Reusable UI components for the rewards page.

mod button;
mod input;
mod modal;
mod spinner;
mod toast;

pub use button::*;
pub use input::*;
pub use modal::*;
pub use spinner::*;
pub use toast::*;
