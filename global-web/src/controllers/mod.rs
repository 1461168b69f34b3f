//! Page controllers. Each one looks up the elements it needs and stays
//! inactive when any of them is missing from the current page.

pub mod search;
pub mod settings;
pub mod sidebar;
pub mod theme;

use std::rc::Rc;

use global_core::{Role, SiteConfig};
use web_sys::Document;

use crate::dom;

/// Where redirects go. The default sends the browser away; tests substitute a recorder.
pub type Navigate = Rc<dyn Fn(&str)>;

/// What every controller may read when it is wired.
#[derive(Clone)]
pub struct PageContext {
    pub document: Document,
    /// Read once from storage at load; controllers never re-check it.
    pub role: Role,
    pub config: &'static SiteConfig,
    pub navigate: Navigate,
}

impl PageContext {
    #[must_use]
    pub fn new(document: Document, role: Role, config: &'static SiteConfig) -> Self {
        Self {
            document,
            role,
            config,
            navigate: Rc::new(browser_navigate),
        }
    }

    #[must_use]
    pub fn with_navigate(mut self, navigate: Navigate) -> Self {
        self.navigate = navigate;
        self
    }
}

fn browser_navigate(url: &str) {
    if let Err(err) = dom::navigate(url) {
        log::error!("navigation to {url} failed: {err}");
    }
}

/// Wire every controller whose elements exist on the page.
pub fn wire_all(ctx: &PageContext) {
    let prefs = crate::storage::preferences();
    let results = [
        ("theme", theme::wire(&ctx.document, &prefs)),
        ("sidebar", sidebar::wire(ctx)),
        ("settings", settings::wire(&ctx.document, &prefs)),
        ("search", search::wire(ctx)),
    ];
    for (name, result) in results {
        match result {
            Ok(true) => log::debug!("{name} controller wired"),
            Ok(false) => log::debug!("{name} controller skipped: elements missing"),
            Err(err) => log::warn!("{name} controller failed to wire: {err}"),
        }
    }
}
