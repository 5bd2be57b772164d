//! Per-module navigation configuration.
//!
//! A [`ModuleConfig`] fully determines how one module's shell behaves: its
//! base route, sidebar sections, workflow phases and how the active section
//! maps onto them, plus the optional quick-link grid and numbered workflow
//! legend.

use std::collections::BTreeMap;

use opsdeck_core::{NavSection, PhaseKey, SectionKey, WorkflowPhase};
use serde::{Deserialize, Serialize};

/// Navigation configuration for one module.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleConfig {
    /// Module title shown in the top bar.
    pub title: String,
    /// Title shown above the sidebar tree. Falls back to `title` when empty.
    pub sidebar_title: String,
    /// Root route of the module; its item matches exactly.
    pub base_route: String,
    /// Collapsible sidebar sections in display order.
    pub sections: Vec<NavSection>,
    /// Pipeline stages in display order.
    pub workflow_phases: Vec<WorkflowPhase>,
    /// Explicit section-to-phase mapping. Without it, phases are matched
    /// to sections by position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_map: Option<BTreeMap<SectionKey, PhaseKey>>,
    /// Shortcut tiles rendered under the section tree.
    pub quick_links: Vec<QuickLink>,
    /// Numbered steps rendered as a legend at the bottom of the sidebar.
    pub workflow_steps: Vec<WorkflowStep>,
}

impl ModuleConfig {
    /// Sidebar title, falling back to the module title.
    pub fn effective_sidebar_title(&self) -> &str {
        if self.sidebar_title.is_empty() {
            &self.title
        } else {
            &self.sidebar_title
        }
    }
}

/// A shortcut tile in the quick-links grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    /// Tile label.
    pub name: String,
    /// Route the tile opens.
    pub href: String,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Accent color of the tile.
    #[serde(default)]
    pub color: AccentColor,
    /// Optional hint text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the numbered workflow legend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    /// Step title.
    pub title: String,
    /// What happens in this step.
    #[serde(default)]
    pub description: String,
}

/// Accent colors available to quick links.
///
/// Closed set: a color name outside it fails deserialization instead of
/// silently falling back to a default style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Blue.
    #[default]
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Teal.
    Teal,
    /// Indigo.
    Indigo,
    /// Amber.
    Amber,
}

/// Style tokens for an accent color, per color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentStyle {
    /// Tile background token.
    pub background: &'static str,
    /// Icon and text token.
    pub foreground: &'static str,
    /// Dark-scheme background token.
    pub dark_background: &'static str,
    /// Dark-scheme icon and text token.
    pub dark_foreground: &'static str,
}

impl AccentColor {
    /// Every accent color, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Red,
        Self::Teal,
        Self::Indigo,
        Self::Amber,
    ];

    /// Style tokens for this color.
    #[must_use]
    pub const fn style(self) -> AccentStyle {
        match self {
            Self::Blue => AccentStyle {
                background: "bg-blue-100",
                foreground: "text-blue-600",
                dark_background: "bg-blue-900/30",
                dark_foreground: "text-blue-400",
            },
            Self::Green => AccentStyle {
                background: "bg-green-100",
                foreground: "text-green-600",
                dark_background: "bg-green-900/30",
                dark_foreground: "text-green-400",
            },
            Self::Purple => AccentStyle {
                background: "bg-purple-100",
                foreground: "text-purple-600",
                dark_background: "bg-purple-900/30",
                dark_foreground: "text-purple-400",
            },
            Self::Orange => AccentStyle {
                background: "bg-orange-100",
                foreground: "text-orange-600",
                dark_background: "bg-orange-900/30",
                dark_foreground: "text-orange-400",
            },
            Self::Red => AccentStyle {
                background: "bg-red-100",
                foreground: "text-red-600",
                dark_background: "bg-red-900/30",
                dark_foreground: "text-red-400",
            },
            Self::Teal => AccentStyle {
                background: "bg-teal-100",
                foreground: "text-teal-600",
                dark_background: "bg-teal-900/30",
                dark_foreground: "text-teal-400",
            },
            Self::Indigo => AccentStyle {
                background: "bg-indigo-100",
                foreground: "text-indigo-600",
                dark_background: "bg-indigo-900/30",
                dark_foreground: "text-indigo-400",
            },
            Self::Amber => AccentStyle {
                background: "bg-amber-100",
                foreground: "text-amber-600",
                dark_background: "bg-amber-900/30",
                dark_foreground: "text-amber-400",
            },
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
    fn sidebar_title_falls_back_to_title() {
        let mut module = ModuleConfig {
            title: "Human Resources".to_string(),
            ..ModuleConfig::default()
        };
        assert_eq!(module.effective_sidebar_title(), "Human Resources");
        module.sidebar_title = "HR".to_string();
        assert_eq!(module.effective_sidebar_title(), "HR");
    }

    #[test]
    fn accent_styles_are_distinct() {
        let mut backgrounds: Vec<_> = AccentColor::ALL.iter().map(|c| c.style().background).collect();
        backgrounds.sort_unstable();
        backgrounds.dedup();
        assert_eq!(backgrounds.len(), AccentColor::ALL.len());
    }

    #[test]
    fn unknown_accent_color_rejected() {
        let json = serde_json::json!({"name": "Reports", "href": "/hr/reports", "color": "magenta"});
        assert!(serde_json::from_value::<QuickLink>(json).is_err());
    }

    #[test]
    fn quick_link_color_defaults_to_blue() {
        let json = serde_json::json!({"name": "Reports", "href": "/hr/reports"});
        let link: QuickLink = serde_json::from_value(json).unwrap();
        assert_eq!(link.color, AccentColor::Blue);
        assert_eq!(link.color.style().foreground, "text-blue-600");
    }

    #[test]
    fn phase_map_deserializes_keys() {
        let json = serde_json::json!({
            "baseRoute": "/hr",
            "phaseMap": {"payroll": "process"}
        });
        let module: ModuleConfig = serde_json::from_value(json).unwrap();
        let map = module.phase_map.unwrap();
        assert_eq!(map.get("payroll").map(PhaseKey::as_str), Some("process"));
    }

    #[test]
    fn phase_map_omitted_when_none() {
        let json = serde_json::to_value(ModuleConfig::default()).unwrap();
        assert!(json.get("phaseMap").is_none());
        assert!(json.get("workflowSteps").is_some());
    }
}
