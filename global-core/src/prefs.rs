//! Typed access to the values the pages keep in browser storage.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::PreferenceStore;
use crate::font_scale::FontScale;
use crate::role::Role;
use crate::theme::ThemeFlag;

/// Storage keys shared with the rest of the site's scripts.
pub mod keys {
    pub const CURRENT_USER: &str = "currentUser";
    pub const THEME: &str = "theme";
    pub const FONT_SCALE: &str = "fontScale";
}

/// Preference facade over any [`PreferenceStore`], applying documented defaults.
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Role of the signed-in visitor. Written by the login page, never here.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_stored(self.store.get(keys::CURRENT_USER).as_deref())
    }

    #[must_use]
    pub fn theme(&self) -> ThemeFlag {
        ThemeFlag::from_stored(self.store.get(keys::THEME).as_deref())
    }

    pub fn set_theme(&self, theme: ThemeFlag) {
        self.store.set(keys::THEME, theme.as_str());
    }

    #[must_use]
    pub fn font_scale(&self) -> FontScale {
        FontScale::from_stored(self.store.get(keys::FONT_SCALE).as_deref())
    }

    pub fn set_font_scale(&self, scale: &FontScale) {
        self.store.set(keys::FONT_SCALE, scale.as_str());
    }
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `pairs`.
    #[must_use]
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in pairs {
            store.set(key, value);
        }
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_defaults() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.role(), Role::Normal);
        assert_eq!(prefs.theme(), ThemeFlag::Light);
        assert_eq!(prefs.font_scale(), FontScale::default());
        assert!(prefs.store().is_empty());
    }

    #[test]
    fn reads_use_the_site_keys() {
        let store = MemoryStore::with_entries([
            ("currentUser", "admin"),
            ("theme", "dark"),
            ("fontScale", "1.3"),
        ]);
        let prefs = Preferences::new(&store);
        assert_eq!(prefs.role(), Role::Admin);
        assert_eq!(prefs.theme(), ThemeFlag::Dark);
        assert_eq!(prefs.font_scale().as_str(), "1.3");
    }

    #[test]
    fn writes_store_plain_strings() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(&store);
        prefs.set_theme(ThemeFlag::Dark);
        prefs.set_font_scale(&FontScale::from_input("0.8"));
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(store.get(keys::FONT_SCALE).as_deref(), Some("0.8"));
        assert_eq!(store.get(keys::CURRENT_USER), None);
    }
}
