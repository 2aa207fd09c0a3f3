//! Browser `localStorage` access behind an injectable capability.
//!
//! Preference persistence is best-effort browser-only behavior: storage can
//! be absent, disabled, or full, and every failure path degrades to "no
//! stored value" on read and a dropped write.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// String key-value store that survives page reloads.
pub trait PreferenceStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str);
}

/// `localStorage`-backed store. Requires a browser environment; native
/// builds see an empty store that drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
