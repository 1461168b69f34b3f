//! Functions page scripts and inline `onclick` handlers call by name.

use global_core::home_url;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::site_config;
use crate::dom::{self, DomError};
use crate::storage::preferences;

/// Home timeline for the role currently in storage.
///
/// Unlike the controllers, this re-reads the role on every call.
#[must_use]
pub fn home_target() -> &'static str {
    home_url(preferences().role(), site_config())
}

/// Go to the home timeline of the signed-in role.
#[wasm_bindgen(js_name = redirectToHome)]
pub fn redirect_to_home() {
    let url = home_target();
    if let Err(err) = dom::navigate(url) {
        log::error!("redirect to {url} failed: {err}");
    }
}

/// Expose `userType`, `readPost` and `redirectToHome` on `window` for
/// classic scripts. `userType` is the role read at load and is not refreshed.
///
/// # Errors
/// Returns an error if no window is available or a property cannot be set.
pub fn install() -> Result<(), DomError> {
    let window = dom::window().ok_or(DomError::NoWindow)?;
    let role = preferences().role();
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("userType"),
        &JsValue::from_str(role.as_str()),
    )?;

    let read = Closure::wrap(Box::new(|post: JsValue, element: JsValue| {
        match element.dyn_into::<Element>() {
            Ok(element) => crate::speech::read_post(post, element),
            Err(_) => log::warn!("readPost called without a post element"),
        }
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    let home = Closure::wrap(Box::new(redirect_to_home) as Box<dyn FnMut()>);

    js_sys::Reflect::set(&window, &JsValue::from_str("readPost"), read.as_ref())?;
    js_sys::Reflect::set(&window, &JsValue::from_str("redirectToHome"), home.as_ref())?;
    // Referenced from `window` for the rest of the page's life.
    read.forget();
    home.forget();
    Ok(())
}
