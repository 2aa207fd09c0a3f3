//! Local UI chrome state.
//!
//! Keeps transient presentation concerns out of the DOM so controls can
//! reflect the current theme without re-querying the page root.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for page chrome.
///
/// `dark_mode` mirrors the dark class on the page root; it is synced once
/// at startup from the restore pass and after every toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
