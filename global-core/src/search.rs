//! Responsive search bar decisions.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::SiteConfig;
use crate::nav::NavTarget;
use crate::role::Role;

/// Form class marking the bar as open on narrow screens.
pub const EXPANDED_CLASS: &str = "search-expanded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Open the collapsed bar and focus its input; nothing is searched yet.
    Expand,
    /// Leave the page for the results view.
    Navigate,
}

/// What a click on the search button does.
#[must_use]
pub fn button_action(viewport_width: f64, expanded: bool, breakpoint: u32) -> SearchAction {
    if viewport_width <= f64::from(breakpoint) && !expanded {
        SearchAction::Expand
    } else {
        SearchAction::Navigate
    }
}

/// Whether a document click should fold the bar back up.
#[must_use]
pub const fn should_collapse(click_inside_form: bool, expanded: bool) -> bool {
    !click_inside_form && expanded
}

/// Bytes `encodeURIComponent` leaves alone besides ASCII letters and digits.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Results page for `role` with the trimmed, percent-encoded term as `q`.
#[must_use]
pub fn search_url(role: Role, term: Option<&str>, config: &SiteConfig) -> String {
    let term = term.map(str::trim).unwrap_or_default();
    let page = NavTarget::SearchResults.path(config.routes(role));
    format!("{page}?q={}", utf8_percent_encode(term, QUERY_VALUE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_collapsed_bar_expands_first() {
        assert_eq!(button_action(768.0, false, 768), SearchAction::Expand);
        assert_eq!(button_action(320.0, false, 768), SearchAction::Expand);
        assert_eq!(button_action(320.0, true, 768), SearchAction::Navigate);
    }

    #[test]
    fn desktop_always_navigates() {
        assert_eq!(button_action(769.0, false, 768), SearchAction::Navigate);
        assert_eq!(button_action(1440.0, true, 768), SearchAction::Navigate);
    }

    #[test]
    fn collapse_only_on_outside_click_while_open() {
        assert!(should_collapse(false, true));
        assert!(!should_collapse(true, true));
        assert!(!should_collapse(false, false));
    }

    #[test]
    fn url_is_trimmed_and_encoded() {
        let config = SiteConfig::default();
        assert_eq!(
            search_url(Role::Normal, Some("  hola mundo "), &config),
            "../Searchres/Searchres.html?q=hola%20mundo"
        );
        assert_eq!(
            search_url(Role::Normal, Some("café & gol"), &config),
            "../Searchres/Searchres.html?q=caf%C3%A9%20%26%20gol"
        );
    }

    #[test]
    fn unreserved_marks_are_left_as_typed() {
        let config = SiteConfig::default();
        assert_eq!(
            search_url(Role::Normal, Some("gol!(final)*"), &config),
            "../Searchres/Searchres.html?q=gol!(final)*"
        );
        assert_eq!(
            search_url(Role::Normal, Some("o'higgins ~2-1_v.2"), &config),
            "../Searchres/Searchres.html?q=o'higgins%20~2-1_v.2"
        );
        assert_eq!(
            search_url(Role::Normal, Some("a/b?c#d+e"), &config),
            "../Searchres/Searchres.html?q=a%2Fb%3Fc%23d%2Be"
        );
    }

    #[test]
    fn missing_input_searches_empty_term() {
        let config = SiteConfig::default();
        assert_eq!(
            search_url(Role::Admin, None, &config),
            "../Searchres Admin/Searchres Admin.html?q="
        );
    }
}
