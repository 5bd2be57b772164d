//! Static navigation definitions.
//!
//! A module's sidebar is a list of [`NavSection`]s, each holding the
//! [`NavItem`] routes it groups. [`WorkflowPhase`]s describe the module's
//! conceptual pipeline, ordered by position. All three are plain data handed
//! to the shell at construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::keys::{PhaseKey, SectionKey};

/// A leaf route entry in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display name.
    pub name: String,
    /// Route the item links to.
    pub href: String,
    /// Optional one-line hint shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NavItem {
    /// Create an item without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A collapsible group of related navigation items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection {
    /// Key, unique within a module's section list.
    pub key: SectionKey,
    /// Heading text.
    pub label: String,
    /// Subheading text.
    #[serde(default)]
    pub description: String,
    /// Icon name resolved by the host's icon set.
    #[serde(default)]
    pub icon: String,
    /// Routes grouped under this section.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Create a section with no items.
    #[must_use]
    pub fn new(key: impl Into<SectionKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: String::new(),
            icon: String::new(),
            items: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A labeled stage in a module's pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPhase {
    /// Phase key.
    pub key: PhaseKey,
    /// Display label.
    pub label: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkflowPhase {
    /// Create a phase without a description.
    #[must_use]
    pub fn new(key: impl Into<PhaseKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_description_omitted_when_none() {
        let item = NavItem::new("Payslips", "/hr/payroll/payslips");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["href"], "/hr/payroll/payslips");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn section_builder() {
        let section = NavSection::new("payroll", "Payroll")
            .with_icon("wallet")
            .item(NavItem::new("Runs", "/hr/payroll"))
            .item(NavItem::new("Payslips", "/hr/payroll/payslips").with_description("Issued"));
        assert_eq!(section.key, "payroll");
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[1].description.as_deref(), Some("Issued"));
    }

    #[test]
    fn section_partial_json() {
        let json = serde_json::json!({
            "key": "overview",
            "label": "Overview",
            "items": [{"name": "Dashboard", "href": "/hr"}]
        });
        let section: NavSection = serde_json::from_value(json).unwrap();
        assert_eq!(section.key, "overview");
        assert!(section.description.is_empty());
        assert!(section.icon.is_empty());
        assert_eq!(section.items[0].href, "/hr");
    }

    #[test]
    fn phase_serde_camel_case() {
        let phase = WorkflowPhase::new("setup", "Setup").with_description("Configure");
        let json = serde_json::to_value(&phase).unwrap();
        assert_eq!(json["key"], "setup");
        assert_eq!(json["description"], "Configure");
    }
}
