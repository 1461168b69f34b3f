//! Text-size multiplier driven by the accessibility slider.
//!
//! The slider string is kept verbatim: it is what gets stored, what goes into
//! the `--font-scale` style variable and what the label prints. Only the label
//! comparison looks at the numeric reading. No range is enforced.

use std::fmt;

/// CSS custom property consumed by the stylesheet.
pub const STYLE_VAR: &str = "--font-scale";

#[derive(Debug, Clone, PartialEq)]
pub struct FontScale {
    raw: String,
    value: f64,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            raw: "1".to_string(),
            value: 1.0,
        }
    }
}

impl FontScale {
    /// Parse a numeric scale string, keeping the original text.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self {
            raw: raw.to_string(),
            value,
        })
    }

    /// Interpret a stored `fontScale` value, falling back to `1` when missing or malformed.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Accept a slider reading as-is.
    ///
    /// A non-numeric string is still kept; it compares as neither equal to nor
    /// greater than one, so it labels as small.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| Self {
            raw: raw.to_string(),
            value: f64::NAN,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> String {
        if (self.value - 1.0).abs() < f64::EPSILON {
            "Normal".to_string()
        } else if self.value > 1.0 {
            format!("Grande ({}x)", self.raw)
        } else {
            format!("Pequeño ({}x)", self.raw)
        }
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_by_comparison_with_one() {
        assert_eq!(FontScale::from_input("1").label(), "Normal");
        assert_eq!(FontScale::from_input("1.0").label(), "Normal");
        assert_eq!(FontScale::from_input("1.2").label(), "Grande (1.2x)");
        assert_eq!(FontScale::from_input("0.9").label(), "Pequeño (0.9x)");
    }

    #[test]
    fn stored_garbage_falls_back_to_default() {
        assert_eq!(FontScale::from_stored(Some("huge")), FontScale::default());
        assert_eq!(FontScale::from_stored(Some("NaN")), FontScale::default());
        assert_eq!(FontScale::from_stored(None).as_str(), "1");
        assert_eq!(FontScale::from_stored(Some("1.4")).as_str(), "1.4");
    }

    #[test]
    fn slider_values_are_not_clamped() {
        let scale = FontScale::from_input("7.5");
        assert_eq!(scale.as_str(), "7.5");
        assert_eq!(scale.label(), "Grande (7.5x)");
        assert_eq!(FontScale::from_input("-2").label(), "Pequeño (-2x)");
    }

    #[test]
    fn non_numeric_input_labels_small() {
        let scale = FontScale::from_input("abc");
        assert_eq!(scale.to_string(), "abc");
        assert_eq!(scale.label(), "Pequeño (abcx)");
    }
}
