//! IMPCTON Rewards UI Components
//!
//! Presentational Dioxus components for the rewards page. They hold no
//! rewards state of their own: values come in through props and user
//! intent goes out through event handlers.
//!
//! ## Palette
//!
//! - **Ton blue (#0098ea)**: primary actions, focus rings
//! - **Amber (#f5a524)**: secondary actions, the token balance
//! - **Night (#10151c)**: background

pub mod components;

pub use components::*;
