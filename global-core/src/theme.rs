//! Light/dark visual mode.

/// Body class that switches the stylesheet into dark mode.
pub const DARK_CLASS: &str = "dark-mode";

/// Persisted visual mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    Dark,
    #[default]
    Light,
}

impl ThemeFlag {
    /// Interpret a stored `theme` value. Only `dark` selects dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph shown on the toggle button: the sun offers a way back to light mode.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_is_light() {
        assert_eq!(ThemeFlag::from_stored(None), ThemeFlag::Light);
        assert_eq!(ThemeFlag::from_stored(Some("DARK")), ThemeFlag::Light);
        assert_eq!(ThemeFlag::from_stored(Some("dark")), ThemeFlag::Dark);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for flag in [ThemeFlag::Dark, ThemeFlag::Light] {
            assert_eq!(flag.toggled().toggled(), flag);
            assert_ne!(flag.toggled(), flag);
        }
    }

    #[test]
    fn icons_follow_mode() {
        assert_eq!(ThemeFlag::Dark.icon(), "☀️");
        assert_eq!(ThemeFlag::Light.icon(), "🌙");
    }
}
