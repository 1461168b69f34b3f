//! Dark-mode toggle.

use global_core::theme::DARK_CLASS;
use global_core::{PreferenceStore, Preferences, ThemeFlag};
use web_sys::{Document, HtmlElement};

use crate::dom::{self, DomError};

pub const TOGGLE_ID: &str = "theme-toggle";

/// Apply the stored theme and hook up `#theme-toggle` if present.
///
/// The body class is applied even on pages without the toggle.
///
/// # Errors
/// Returns an error if the click listener cannot be attached.
pub fn wire<S>(doc: &Document, prefs: &Preferences<S>) -> Result<bool, DomError>
where
    S: PreferenceStore + Clone + 'static,
{
    let Some(body) = doc.body() else {
        return Ok(false);
    };
    let button = dom::by_id::<HtmlElement>(doc, TOGGLE_ID);

    if prefs.theme().is_dark() {
        body.class_list().add_1(DARK_CLASS)?;
        if let Some(button) = &button {
            button.set_text_content(Some(ThemeFlag::Dark.icon()));
        }
    }

    let Some(button) = button else {
        return Ok(false);
    };
    let store = prefs.store().clone();
    let target = button.clone();
    dom::listen(&button, "click", move |_| {
        let dark = body.class_list().toggle(DARK_CLASS).unwrap_or(false);
        let theme = if dark { ThemeFlag::Dark } else { ThemeFlag::Light };
        target.set_text_content(Some(theme.icon()));
        Preferences::new(store.clone()).set_theme(theme);
    })?;
    Ok(true)
}
