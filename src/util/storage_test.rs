#![cfg(not(feature = "csr"))]

use super::*;
use crate::util::test_support::MemoryStore;

#[test]
fn browser_store_reads_nothing_natively() {
    assert_eq!(BrowserStore.get("theme"), None);
}

#[test]
fn browser_store_drops_writes_natively() {
    BrowserStore.set("theme", "dark");
    assert_eq!(BrowserStore.get("theme"), None);
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get("theme"), None);

    store.set("theme", "dark");
    assert_eq!(store.get("theme"), Some("dark".to_owned()));

    store.set("theme", "light");
    assert_eq!(store.get("theme"), Some("light".to_owned()));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::default();
    store.set("theme", "dark");
    assert_eq!(store.get("other"), None);
}
