//! Shared application state provided through Leptos context.

pub mod ui;
