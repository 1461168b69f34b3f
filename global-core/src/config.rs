//! Site configuration: page routes per role and a few fixed constants.

use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid route for {role}: {field} is empty")]
    EmptyRoute { role: &'static str, field: &'static str },
}

/// Relative paths to the sibling pages one role navigates between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub home: String,
    pub profile: String,
    pub saved: String,
    pub mundiales: String,
    pub search_results: String,
}

impl RouteTable {
    fn normal() -> Self {
        Self {
            home: "../Pagina inicio/TL.html".to_string(),
            profile: "../Perfil/perfil.html".to_string(),
            saved: "../Saved/guardados.html".to_string(),
            mundiales: "../Mundiales/Mundiales.html".to_string(),
            search_results: "../Searchres/Searchres.html".to_string(),
        }
    }

    fn admin() -> Self {
        Self {
            home: "../Pagina Inicio Admin/TLAdmin.html".to_string(),
            profile: "../Perfil Admin/perfil Admin.html".to_string(),
            saved: "../Saved/guardados.html".to_string(),
            mundiales: "../Mundiales/Mundiales.html".to_string(),
            search_results: "../Searchres Admin/Searchres Admin.html".to_string(),
        }
    }

    fn validate(&self, role: &'static str) -> Result<(), ConfigError> {
        let fields = [
            ("home", &self.home),
            ("profile", &self.profile),
            ("saved", &self.saved),
            ("mundiales", &self.mundiales),
            ("search_results", &self.search_results),
        ];
        match fields.iter().find(|(_, path)| path.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::EmptyRoute { role, field: *field }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub normal: RouteTable,
    pub admin: RouteTable,
    /// Widest viewport, in CSS pixels, that gets the collapsible search bar.
    pub mobile_breakpoint: u32,
    /// BCP 47 tag handed to the speech engine.
    pub speech_locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            normal: RouteTable::normal(),
            admin: RouteTable::admin(),
            mobile_breakpoint: 768,
            speech_locale: "es-MX".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document. Omitted sections keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a route is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.normal.validate("normal")?;
        config.admin.validate("admin")?;
        Ok(config)
    }

    #[must_use]
    pub const fn routes(&self, role: Role) -> &RouteTable {
        match role {
            Role::Admin => &self.admin,
            Role::Normal => &self.normal,
        }
    }
}
