//! Style-class access for UI elements.
//!
//! DESIGN
//! ======
//! The flip and theme operations act on an explicit element handle instead
//! of reaching for document globals, so native tests can drive them
//! against an in-memory implementation.

/// Mutable set of style classes carried by a UI element.
pub trait ClassTarget {
    /// Whether `name` is currently present.
    fn has_class(&self, name: &str) -> bool;

    /// Add `name`. Adding an already-present class changes nothing.
    fn add_class(&self, name: &str);

    /// Invert the presence of `name`, returning the resulting presence.
    fn toggle_class(&self, name: &str) -> bool;
}

#[cfg(feature = "csr")]
impl ClassTarget for web_sys::Element {
    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn add_class(&self, name: &str) {
        let _ = self.class_list().add_1(name);
    }

    fn toggle_class(&self, name: &str) -> bool {
        self.class_list().toggle(name).unwrap_or(false)
    }
}
