//! # flipcard
//!
//! Leptos + WASM page with a deck of flip cards and a persisted
//! light/dark theme.
//!
//! The browser build (`csr` feature) renders the deck and wires the flip
//! and theme operations to real DOM elements and `localStorage`. The
//! native build compiles the same logic against injectable capabilities
//! so the behavior is testable without a browser.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
