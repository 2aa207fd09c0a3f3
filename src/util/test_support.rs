//! In-memory fakes for the element and storage capabilities.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::util::class_target::ClassTarget;
use crate::util::storage::PreferenceStore;

/// Element stand-in tracking only its class set.
#[derive(Debug, Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
}

impl FakeElement {
    /// Build an element that already carries `classes`.
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()),
        }
    }
}

impl ClassTarget for FakeElement {
    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    fn add_class(&self, name: &str) {
        self.classes.borrow_mut().insert(name.to_owned());
    }

    fn toggle_class(&self, name: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(name) {
            false
        } else {
            classes.insert(name.to_owned());
            true
        }
    }
}

/// Store stand-in backed by a plain map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
