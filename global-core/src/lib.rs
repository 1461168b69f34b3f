//! GLOBAL site core
//!
//! Platform-agnostic rules behind the interactive parts of the GLOBAL pages:
//! stored preferences, role-based routes, the theme and font-scale controls,
//! search redirects and the post reader. This crate has no DOM dependency;
//! the browser layer implements the traits defined here.

pub mod config;
pub mod font_scale;
pub mod nav;
pub mod prefs;
pub mod role;
pub mod search;
pub mod speech;
pub mod theme;

pub use config::{ConfigError, RouteTable, SiteConfig};
pub use font_scale::FontScale;
pub use nav::{ADMIN_LINKS, LinkRewrite, NavTarget, admin_link_rewrites, home_url};
pub use prefs::{MemoryStore, Preferences, keys};
pub use role::Role;
pub use search::{SearchAction, button_action, search_url, should_collapse};
pub use speech::{
    Author, HighlightTarget, Post, ReadOutcome, Reader, ReaderButton, SpeechEvent, Utterance,
    utterance_text,
};
pub use theme::ThemeFlag;

/// Trait for abstracting the durable key-value store backing preferences
///
/// Implementations never surface errors: a failed read behaves like a missing
/// key and a failed write is dropped.
pub trait PreferenceStore {
    /// Read the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Trait for abstracting the speech-synthesis engine
///
/// The engine is opaque: it speaks one utterance at a time, reports start,
/// end and error through the listener, and can cancel whatever is active.
pub trait SpeechEngine {
    /// Whether an utterance is currently being spoken.
    fn is_speaking(&self) -> bool;

    /// Stop any active or pending utterance.
    fn cancel(&self);

    /// Queue `utterance` and report its lifecycle to `listener`.
    fn speak(&self, utterance: Utterance, listener: Box<dyn FnMut(SpeechEvent)>);
}
