//! Shell appearance and behavior settings.

use serde::{Deserialize, Serialize};

/// Light or dark rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl ColorScheme {
    /// The other scheme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse `light`/`dark`, case-insensitive.
    pub fn parse(val: &str) -> Option<Self> {
        match val.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// UI settings container.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiSettings {
    /// Initial color scheme handed to the theme capability.
    pub color_scheme: ColorScheme,
    /// Section key always expanded when a shell mounts.
    pub pinned_section: String,
    /// Module opened when none is named.
    pub default_module: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            pinned_section: "overview".to_string(),
            default_module: "hr".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ColorScheme::parse("DARK"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse("light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::parse("sepia"), None);
    }

    #[test]
    fn ui_partial_json() {
        let json = serde_json::json!({ "colorScheme": "dark" });
        let ui: UiSettings = serde_json::from_value(json).unwrap();
        assert_eq!(ui.color_scheme, ColorScheme::Dark);
        assert_eq!(ui.pinned_section, "overview");
    }

    #[test]
    fn unknown_scheme_rejected() {
        let json = serde_json::json!({ "colorScheme": "sepia" });
        assert!(serde_json::from_value::<UiSettings>(json).is_err());
    }
}
