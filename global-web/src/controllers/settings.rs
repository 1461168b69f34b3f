//! Accessibility modal: open/close, font-scale slider and the post reader toggle.

use global_core::font_scale::STYLE_VAR;
use global_core::{FontScale, PreferenceStore, Preferences, ReaderButton};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::dom::{self, DomError};
use crate::speech::{WebSpeech, toggle_reader};

pub const MODAL_ID: &str = "settings-modal";
pub const SIDEBAR_OPENER_ID: &str = "open-settings-btn";
/// Profile pages open the modal from their secondary action button.
pub const PROFILE_OPENER_SELECTOR: &str = ".btn-secondary";
pub const CLOSE_ID: &str = "close-modal-btn";
pub const SLIDER_ID: &str = "font-size-slider";
pub const SLIDER_LABEL_SELECTOR: &str = ".slider-value";
pub const TTS_BUTTON_ID: &str = "tts-toggle-btn";
pub const TTS_HELPER_ID: &str = "tts-helper-text";

const VISIBLE_CLASS: &str = "visible";
const HIDDEN_CLASS: &str = "hidden";

/// Wire the modal and, when the page carries it, its inner controls.
///
/// # Errors
/// Returns an error if a listener cannot be attached or the stored scale cannot be applied.
pub fn wire<S>(doc: &Document, prefs: &Preferences<S>) -> Result<bool, DomError>
where
    S: PreferenceStore + Clone + 'static,
{
    let mut wired = wire_modal(doc)?;
    if let Some(slider) = dom::by_id::<HtmlInputElement>(doc, SLIDER_ID) {
        wire_font_scale(doc, &slider, prefs)?;
        wire_reader_toggle(doc)?;
        wired = true;
    }
    Ok(wired)
}

fn show(modal: &Element, visible: bool) {
    let classes = modal.class_list();
    let (add, remove) = if visible {
        (VISIBLE_CLASS, HIDDEN_CLASS)
    } else {
        (HIDDEN_CLASS, VISIBLE_CLASS)
    };
    let _ = classes.add_1(add);
    let _ = classes.remove_1(remove);
}

fn wire_modal(doc: &Document) -> Result<bool, DomError> {
    let Some(modal) = doc.get_element_by_id(MODAL_ID) else {
        return Ok(false);
    };

    let openers = [
        doc.get_element_by_id(SIDEBAR_OPENER_ID),
        dom::query_document::<Element>(doc, PROFILE_OPENER_SELECTOR),
    ];
    for opener in openers.into_iter().flatten() {
        let modal = modal.clone();
        dom::listen(&opener, "click", move |_| show(&modal, true))?;
    }

    if let Some(close) = doc.get_element_by_id(CLOSE_ID) {
        let modal = modal.clone();
        dom::listen(&close, "click", move |_| show(&modal, false))?;
    }

    let backdrop = modal.clone();
    dom::listen(&modal, "click", move |e: Event| {
        // Clicks inside the dialog bubble up here too; only the backdrop closes.
        let on_backdrop = e
            .target()
            .is_some_and(|target| target.unchecked_ref::<Element>() == &backdrop);
        if on_backdrop {
            show(&backdrop, false);
        }
    })?;
    Ok(true)
}

/// Push `scale` into the page: style variable, slider position and label.
fn apply_scale(
    body: Option<&HtmlElement>,
    slider: &HtmlInputElement,
    label: Option<&Element>,
    scale: &FontScale,
) {
    if let Some(body) = body {
        if let Err(err) = body.style().set_property(STYLE_VAR, scale.as_str()) {
            log::warn!("cannot set {STYLE_VAR}: {}", dom::js_error_message(&err));
        }
    }
    slider.set_value(scale.as_str());
    if let Some(label) = label {
        label.set_text_content(Some(&scale.label()));
    }
}

fn wire_font_scale<S>(
    doc: &Document,
    slider: &HtmlInputElement,
    prefs: &Preferences<S>,
) -> Result<(), DomError>
where
    S: PreferenceStore + Clone + 'static,
{
    let body = doc.body();
    let label = dom::query_document::<Element>(doc, SLIDER_LABEL_SELECTOR);
    apply_scale(body.as_ref(), slider, label.as_ref(), &prefs.font_scale());

    let store = prefs.store().clone();
    let input = slider.clone();
    dom::listen(slider, "input", move |_| {
        let scale = FontScale::from_input(&input.value());
        apply_scale(body.as_ref(), &input, label.as_ref(), &scale);
        Preferences::new(store.clone()).set_font_scale(&scale);
    })
}

fn render_reader_button(button: &Element, helper: Option<&Element>, state: ReaderButton) {
    button.set_inner_html(&state.inner_html());
    if let Some(helper) = helper {
        helper.set_text_content(Some(state.helper_text()));
    }
}

fn wire_reader_toggle(doc: &Document) -> Result<(), DomError> {
    let Some(button) = doc.get_element_by_id(TTS_BUTTON_ID) else {
        return Ok(());
    };
    let helper = doc.get_element_by_id(TTS_HELPER_ID);
    let target = button.clone();
    dom::listen(&button, "click", move |_| {
        let state = toggle_reader(&WebSpeech::from_window());
        render_reader_button(&target, helper.as_ref(), state);
    })
}
