//! Sidebar destinations and the admin link rewrite.

use crate::config::{RouteTable, SiteConfig};
use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Profile,
    Saved,
    Mundiales,
    SearchResults,
}

impl NavTarget {
    #[must_use]
    pub fn path(self, routes: &RouteTable) -> &str {
        match self {
            Self::Home => &routes.home,
            Self::Profile => &routes.profile,
            Self::Saved => &routes.saved,
            Self::Mundiales => &routes.mundiales,
            Self::SearchResults => &routes.search_results,
        }
    }
}

/// Sidebar link ids whose targets change for admins.
pub const ADMIN_LINKS: [(&str, NavTarget); 5] = [
    ("sidebar-link-inicio", NavTarget::Home),
    ("sidebar-link-perfil", NavTarget::Profile),
    ("sidebar-link-buscar", NavTarget::Saved),
    ("sidebar-link-mundiales", NavTarget::Mundiales),
    ("sidebar-link-searchres", NavTarget::SearchResults),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite<'a> {
    pub element_id: &'static str,
    pub href: &'a str,
}

/// Link targets to overwrite at load. Empty for everyone but admins; the
/// markup already points at the normal pages.
#[must_use]
pub fn admin_link_rewrites(role: Role, config: &SiteConfig) -> Vec<LinkRewrite<'_>> {
    if !role.is_admin() {
        return Vec::new();
    }
    let routes = config.routes(role);
    ADMIN_LINKS
        .iter()
        .map(|&(element_id, target)| LinkRewrite {
            element_id,
            href: target.path(routes),
        })
        .collect()
}

#[must_use]
pub fn home_url(role: Role, config: &SiteConfig) -> &str {
    NavTarget::Home.path(config.routes(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_users_get_no_rewrites() {
        assert!(admin_link_rewrites(Role::Normal, &SiteConfig::default()).is_empty());
    }

    #[test]
    fn admins_get_all_five_links() {
        let config = SiteConfig::default();
        let rewrites = admin_link_rewrites(Role::Admin, &config);
        assert_eq!(rewrites.len(), 5);
        assert_eq!(
            rewrites[0],
            LinkRewrite {
                element_id: "sidebar-link-inicio",
                href: "../Pagina Inicio Admin/TLAdmin.html",
            }
        );
        assert_eq!(rewrites[1].href, "../Perfil Admin/perfil Admin.html");
        assert_eq!(rewrites[2].href, "../Saved/guardados.html");
        assert_eq!(rewrites[3].href, "../Mundiales/Mundiales.html");
        assert_eq!(rewrites[4].href, "../Searchres Admin/Searchres Admin.html");
    }

    #[test]
    fn home_depends_on_role() {
        let config = SiteConfig::default();
        assert_eq!(home_url(Role::Admin, &config), "../Pagina Inicio Admin/TLAdmin.html");
        assert_eq!(home_url(Role::Normal, &config), "../Pagina inicio/TL.html");
    }
}
