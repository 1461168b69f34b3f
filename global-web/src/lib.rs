#![forbid(unsafe_code)]
//! GLOBAL page behaviors compiled to WebAssembly.
//!
//! Loaded by every page of the site. On start it applies stored preferences
//! and wires whichever controllers find their elements on the current page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod controllers;
pub mod dom;
pub mod globals;
pub mod logger;
pub mod speech;
pub mod storage;

use controllers::PageContext;

/// Wire the current document. Runs once the DOM is parsed.
pub fn boot() {
    let Some(document) = dom::document() else {
        dom::console_error("GLOBAL: no document, page behaviors disabled");
        return;
    };
    let role = storage::preferences().role();
    log::debug!("booting page as {} user", role.as_str());
    let ctx = PageContext::new(document, role, config::site_config());
    controllers::wire_all(&ctx);
}

#[cfg(target_arch = "wasm32")]
fn boot_when_ready() -> Result<(), dom::DomError> {
    let document = dom::document().ok_or(dom::DomError::NoDocument)?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| boot())
    } else {
        boot();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init();
    if let Err(err) = globals::install() {
        log::warn!("page globals not installed: {err}");
    }
    if let Err(err) = boot_when_ready() {
        log::error!("page behaviors disabled: {err}");
    }
}
