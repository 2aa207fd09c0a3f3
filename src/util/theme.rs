//! Dark mode toggle and startup restore.
//!
//! DESIGN
//! ======
//! The active theme lives in two places that must stay in agreement: the
//! `dark` class on the page root and the `theme` key in the preference
//! store. The toggle derives the persisted value by reading back the class
//! it just applied, so a completed toggle always leaves both matching.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::util::class_target::ClassTarget;
use crate::util::storage::PreferenceStore;

/// Preference-store key holding the saved theme.
pub const STORAGE_KEY: &str = "theme";

/// Class on the page root that activates the dark palette.
pub const DARK_CLASS: &str = "dark";

/// The page-wide display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal stored form, `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two literals is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flip dark mode on `root` and persist the resulting theme.
pub fn toggle(root: &impl ClassTarget, store: &impl PreferenceStore) -> Theme {
    root.toggle_class(DARK_CLASS);
    let current = if root.has_class(DARK_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    };
    store.set(STORAGE_KEY, current.as_str());
    current
}

/// Apply a previously saved theme to `root`.
///
/// Only a stored `"dark"` changes anything. A stored `"light"`, an
/// unrecognized value, or an empty store leaves the root untouched,
/// keeping whatever default the markup already established.
pub fn restore(root: &impl ClassTarget, store: &impl PreferenceStore) {
    let saved = store.get(STORAGE_KEY);
    if saved.as_deref().and_then(Theme::parse) == Some(Theme::Dark) {
        root.add_class(DARK_CLASS);
    }
}

/// Toggle dark mode on the document body and persist it, returning the new
/// theme. Without a browser this is a no-op reporting [`Theme::Light`].
pub fn toggle_page() -> Theme {
    #[cfg(feature = "csr")]
    {
        use crate::util::storage::BrowserStore;

        let Some(body) = page_root() else {
            return Theme::Light;
        };
        let root: &web_sys::Element = body.as_ref();
        toggle(root, &BrowserStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply any saved theme to the document body, returning whether dark mode
/// is active afterwards. Without a browser this is a no-op.
pub fn restore_page() -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::util::storage::BrowserStore;

        let Some(body) = page_root() else {
            return false;
        };
        let root: &web_sys::Element = body.as_ref();
        restore(root, &BrowserStore);
        let dark = root.has_class(DARK_CLASS);
        log::debug!("startup theme: {}", if dark { Theme::Dark } else { Theme::Light });
        dark
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[cfg(feature = "csr")]
fn page_root() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}
