//! Navigation sidebar: open/close and the admin link rewrite.

use std::rc::Rc;

use global_core::admin_link_rewrites;
use web_sys::{Document, Element, HtmlAnchorElement};

use super::PageContext;
use crate::dom::{self, DomError};

pub const PANEL_ID: &str = "sidebar";
pub const OVERLAY_ID: &str = "sidebarOverlay";
pub const OPEN_ID: &str = "openSidebar";
pub const CLOSE_ID: &str = "closeSidebar";
pub const LINK_SELECTOR: &str = ".sidebar-link";
/// The sidebar entry that opens the settings modal keeps the panel open.
pub const SETTINGS_LINK_ID: &str = "open-settings-btn";

const OPEN_CLASS: &str = "open";
const ACTIVE_CLASS: &str = "active";

/// Panel and backdrop; either may be missing on pages without a sidebar.
#[derive(Clone)]
struct Panel {
    panel: Option<Element>,
    overlay: Option<Element>,
}

impl Panel {
    fn find(doc: &Document) -> Self {
        Self {
            panel: doc.get_element_by_id(PANEL_ID),
            overlay: doc.get_element_by_id(OVERLAY_ID),
        }
    }

    fn open(&self) {
        if let Some(panel) = &self.panel {
            let _ = panel.class_list().add_1(OPEN_CLASS);
        }
        if let Some(overlay) = &self.overlay {
            let _ = overlay.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn close(&self) {
        if let Some(panel) = &self.panel {
            let _ = panel.class_list().remove_1(OPEN_CLASS);
        }
        if let Some(overlay) = &self.overlay {
            let _ = overlay.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

/// Wire the sidebar controls, link clicks and admin link targets.
///
/// Open/close buttons need the whole set of panel elements; link handling
/// works on whatever exists.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn wire(ctx: &PageContext) -> Result<bool, DomError> {
    let doc = &ctx.document;
    let panel = Rc::new(Panel::find(doc));
    let mut wired = wire_controls(doc, &panel)?;
    wired |= wire_links(doc, &panel)?;
    wired |= rewrite_admin_links(ctx) > 0;
    Ok(wired)
}

fn wire_controls(doc: &Document, panel: &Rc<Panel>) -> Result<bool, DomError> {
    let (Some(_), Some(overlay), Some(open), Some(close)) = (
        panel.panel.as_ref(),
        panel.overlay.as_ref(),
        doc.get_element_by_id(OPEN_ID),
        doc.get_element_by_id(CLOSE_ID),
    ) else {
        return Ok(false);
    };

    let on_open = Rc::clone(panel);
    dom::listen(&open, "click", move |_| on_open.open())?;
    let on_close = Rc::clone(panel);
    dom::listen(&close, "click", move |_| on_close.close())?;
    let on_backdrop = Rc::clone(panel);
    dom::listen(overlay, "click", move |_| on_backdrop.close())?;
    Ok(true)
}

fn wire_links(doc: &Document, panel: &Rc<Panel>) -> Result<bool, DomError> {
    let links = dom::query_all(doc, LINK_SELECTOR);
    let mut wired = false;
    for link in links {
        if link.id() == SETTINGS_LINK_ID {
            continue;
        }
        let panel = Rc::clone(panel);
        dom::listen(&link, "click", move |_| panel.close())?;
        wired = true;
    }
    Ok(wired)
}

/// Point the fixed sidebar links at the admin pages. Returns how many links changed.
pub fn rewrite_admin_links(ctx: &PageContext) -> usize {
    let rewrites = admin_link_rewrites(ctx.role, ctx.config);
    if rewrites.is_empty() {
        return 0;
    }
    log::info!("admin session: pointing sidebar links at admin pages");
    rewrites
        .iter()
        .filter_map(|rewrite| {
            let link = dom::by_id::<HtmlAnchorElement>(&ctx.document, rewrite.element_id)?;
            link.set_href(rewrite.href);
            Some(())
        })
        .count()
}
