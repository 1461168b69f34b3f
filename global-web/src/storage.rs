//! `localStorage`-backed preference store.

use global_core::{PreferenceStore, Preferences};

use crate::dom;

/// Preferences shared with the other site scripts through `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match dom::local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("reading {key}: {err}");
                return None;
            }
        };
        storage.get_item(key).unwrap_or_else(|err| {
            log::warn!("reading {key}: {}", dom::js_error_message(&err));
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        let result = dom::local_storage().and_then(|storage| Ok(storage.set_item(key, value)?));
        if let Err(err) = result {
            log::warn!("writing {key}: {err}");
        }
    }
}

#[must_use]
pub const fn preferences() -> Preferences<LocalStore> {
    Preferences::new(LocalStore)
}
