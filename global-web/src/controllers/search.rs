//! Responsive search bar.

use std::rc::Rc;

use global_core::search::EXPANDED_CLASS;
use global_core::{SearchAction, button_action, search_url, should_collapse};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, Node};

use super::PageContext;
use crate::dom::{self, DomError};

pub const FORM_ID: &str = "search-form";
pub const BUTTON_ID: &str = "btnsearch";
pub const INPUT_SELECTOR: &str = ".search-input";

struct SearchBar {
    form: Element,
    ctx: PageContext,
    /// Overrides the window width; lets tests pick a viewport.
    viewport: Option<f64>,
}

impl SearchBar {
    /// The bar's own input, focused when it expands.
    fn input(&self) -> Option<HtmlInputElement> {
        dom::query::<HtmlInputElement>(&self.form, INPUT_SELECTOR)
    }

    /// The term comes from the page's first search input, which may sit
    /// outside the form on pages with more than one.
    fn term(&self) -> Option<String> {
        dom::query_document::<HtmlInputElement>(&self.ctx.document, INPUT_SELECTOR)
            .map(|input| input.value())
    }

    fn expanded(&self) -> bool {
        self.form.class_list().contains(EXPANDED_CLASS)
    }

    fn go(&self) {
        let term = self.term();
        let url = search_url(self.ctx.role, term.as_deref(), self.ctx.config);
        (self.ctx.navigate)(&url);
    }

    fn on_button(&self, e: &Event) {
        e.prevent_default();
        let width = self.viewport.or_else(dom::viewport_width).unwrap_or(f64::INFINITY);
        match button_action(width, self.expanded(), self.ctx.config.mobile_breakpoint) {
            SearchAction::Expand => {
                let _ = self.form.class_list().add_1(EXPANDED_CLASS);
                if let Some(input) = self.input() {
                    let _ = input.focus();
                }
            }
            SearchAction::Navigate => self.go(),
        }
    }

    fn on_document_click(&self, e: &Event) {
        let inside = e
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| self.form.contains(Some(&node)));
        if should_collapse(inside, self.expanded()) {
            let _ = self.form.class_list().remove_1(EXPANDED_CLASS);
        }
    }
}

/// Wire the search bar when both `#search-form` and `#btnsearch` exist.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn wire(ctx: &PageContext) -> Result<bool, DomError> {
    wire_with_viewport(ctx, None)
}

/// Same as [`wire`], with the viewport width pinned instead of read from the window.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn wire_with_viewport(ctx: &PageContext, viewport: Option<f64>) -> Result<bool, DomError> {
    let doc = &ctx.document;
    let (Some(form), Some(button)) = (
        doc.get_element_by_id(FORM_ID),
        doc.get_element_by_id(BUTTON_ID),
    ) else {
        return Ok(false);
    };

    let bar = Rc::new(SearchBar {
        form: form.clone(),
        ctx: ctx.clone(),
        viewport,
    });

    let on_button = Rc::clone(&bar);
    dom::listen(&button, "click", move |e| on_button.on_button(&e))?;

    let on_submit = Rc::clone(&bar);
    dom::listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        on_submit.go();
    })?;

    let on_outside = Rc::clone(&bar);
    dom::listen(doc, "click", move |e| on_outside.on_document_click(&e))?;
    Ok(true)
}
