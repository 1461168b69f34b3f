use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Storage, Window};

/// Failures from browser APIs. None of them are fatal for a page: callers log
/// and leave the affected behavior inactive.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .local_storage()?
        .ok_or(DomError::Unavailable("localStorage"))
}

/// Look up an element by id and cast it to the expected interface.
///
/// An element of the wrong type counts as absent.
#[must_use]
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First match for `selector` under `root`, cast to the expected interface.
#[must_use]
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First match for `selector` in the whole document.
#[must_use]
pub fn query_document<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector` in the document.
#[must_use]
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener; the page never detaches it.
    closure.forget();
    Ok(())
}

/// Viewport width in CSS pixels, or `None` outside a browser.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Send the browser to `url`, relative to the current page.
///
/// # Errors
/// Returns an error if no window is available or the navigation is refused.
pub fn navigate(url: &str) -> Result<(), DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .location()
        .set_href(url)?;
    Ok(())
}
