//! Reusable UI component modules.
//!
//! Components render page chrome and the card deck while reading/writing
//! shared state from Leptos context providers.

pub mod flip_card;
pub mod toolbar;
