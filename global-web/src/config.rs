//! Site configuration embedded at build time.

use global_core::SiteConfig;
use once_cell::sync::Lazy;

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_json(include_str!("../static/site.json")).unwrap_or_else(|err| {
        log::error!("site.json rejected, using built-in routes: {err}");
        SiteConfig::default()
    })
});

#[must_use]
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::site_config;

    #[test]
    fn embedded_config_is_loaded() {
        let config = site_config();
        assert_eq!(config.mobile_breakpoint, 768);
        assert_eq!(config.speech_locale, "es-MX");
        assert_eq!(config.admin.search_results, "../Searchres Admin/Searchres Admin.html");
    }
}
