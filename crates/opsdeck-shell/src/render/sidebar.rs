//! Sidebar renderers: workflow indicator, section tree, quick links and the
//! numbered workflow legend.

use opsdeck_core::{NavSection, PhaseKey, Result, SectionKey, WorkflowPhase};
use opsdeck_settings::{AccentColor, QuickLink, WorkflowStep};
use serde::Serialize;

use crate::config::ShellConfig;
use crate::render::RenderScope;

/// The sidebar as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    /// Title above the tree.
    pub title: String,
    /// Phase progress, absent when the module has no phases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowIndicatorView>,
    /// Collapsible section tree.
    pub sections: Vec<SectionView>,
    /// Quick-links grid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_links: Vec<QuickLinkView>,
    /// Numbered workflow legend.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workflow_steps: Vec<WorkflowStepView>,
}

/// Where a phase sits relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    /// Before the current phase.
    Complete,
    /// The current phase.
    Current,
    /// After the current phase, or no phase is current.
    Upcoming,
}

/// One phase in the progress indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseView {
    /// Phase key.
    pub key: PhaseKey,
    /// Phase label.
    pub label: String,
    /// Position relative to the current phase.
    pub status: PhaseStatus,
}

/// The phase progress indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowIndicatorView {
    /// Current phase key.
    pub current: PhaseKey,
    /// Label of the current phase, if it is one of `phases`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_label: Option<String>,
    /// Phases in order.
    pub phases: Vec<PhaseView>,
}

/// A collapsible section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    /// Section key.
    pub key: SectionKey,
    /// Heading.
    pub label: String,
    /// Subheading.
    pub description: String,
    /// Icon name.
    pub icon: String,
    /// Whether the items are shown.
    pub expanded: bool,
    /// Whether this section holds the active item.
    pub active: bool,
    /// Items, always filled; hosts hide them while the section is collapsed.
    pub items: Vec<ItemView>,
}

/// A navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    /// Link text.
    pub name: String,
    /// Target route.
    pub href: String,
    /// Hint text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this is the highlighted item.
    pub active: bool,
}

/// A quick-link tile with its resolved style tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLinkView {
    /// Tile label.
    pub name: String,
    /// Target route.
    pub href: String,
    /// Icon name.
    pub icon: String,
    /// Accent color.
    pub color: AccentColor,
    /// Background token for the active scheme.
    pub background: &'static str,
    /// Foreground token for the active scheme.
    pub foreground: &'static str,
}

/// A numbered legend entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepView {
    /// 1-based position.
    pub number: usize,
    /// Step title.
    pub title: String,
    /// Step description.
    pub description: String,
}

/// Render the full sidebar.
pub fn render_sidebar(scope: &RenderScope<'_>, config: &ShellConfig) -> Result<SidebarView> {
    Ok(SidebarView {
        title: config.sidebar_title.clone(),
        workflow: render_workflow_indicator(scope, &config.workflow_phases)?,
        sections: render_section_tree(scope, &config.sections)?,
        quick_links: render_quick_links(scope, &config.quick_links)?,
        workflow_steps: render_workflow_steps(&config.workflow_steps),
    })
}

/// Render the phase progress indicator; `None` without phases.
pub fn render_workflow_indicator(
    scope: &RenderScope<'_>,
    phases: &[WorkflowPhase],
) -> Result<Option<WorkflowIndicatorView>> {
    let state = scope.layout("WorkflowIndicator")?.state();
    if phases.is_empty() {
        return Ok(None);
    }

    let current = &state.current_phase;
    let current_index = phases.iter().position(|p| &p.key == current);
    let views = phases
        .iter()
        .enumerate()
        .map(|(i, phase)| PhaseView {
            key: phase.key.clone(),
            label: phase.label.clone(),
            status: match current_index {
                Some(c) if i < c => PhaseStatus::Complete,
                Some(c) if i == c => PhaseStatus::Current,
                _ => PhaseStatus::Upcoming,
            },
        })
        .collect();

    Ok(Some(WorkflowIndicatorView {
        current: current.clone(),
        current_label: current_index.map(|i| phases[i].label.clone()),
        phases: views,
    }))
}

/// Render every section in order.
pub fn render_section_tree(scope: &RenderScope<'_>, sections: &[NavSection]) -> Result<Vec<SectionView>> {
    sections
        .iter()
        .map(|section| render_section(scope, section))
        .collect()
}

/// Render one section and its items.
pub fn render_section(scope: &RenderScope<'_>, section: &NavSection) -> Result<SectionView> {
    let state = scope.layout("NavSection")?.state();
    Ok(SectionView {
        key: section.key.clone(),
        label: section.label.clone(),
        description: section.description.clone(),
        icon: section.icon.clone(),
        expanded: state.is_open(&section.key),
        active: state.is_active_section(&section.key),
        items: section
            .items
            .iter()
            .map(|item| ItemView {
                name: item.name.clone(),
                href: item.href.clone(),
                description: item.description.clone(),
                active: !state.active_href.is_empty() && item.href == state.active_href,
            })
            .collect(),
    })
}

/// Render the quick-links grid with scheme-appropriate style tokens.
pub fn render_quick_links(scope: &RenderScope<'_>, links: &[QuickLink]) -> Result<Vec<QuickLinkView>> {
    let dark = scope.layout("QuickLinks")?.is_dark_mode();
    Ok(links
        .iter()
        .map(|link| {
            let style = link.color.style();
            let (background, foreground) = if dark {
                (style.dark_background, style.dark_foreground)
            } else {
                (style.background, style.foreground)
            };
            QuickLinkView {
                name: link.name.clone(),
                href: link.href.clone(),
                icon: link.icon.clone(),
                color: link.color,
                background,
                foreground,
            }
        })
        .collect())
}

/// Number the workflow legend from 1.
pub fn render_workflow_steps(steps: &[WorkflowStep]) -> Vec<WorkflowStepView> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| WorkflowStepView {
            number: i + 1,
            title: step.title.clone(),
            description: step.description.clone(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ShellCapabilities;
    use crate::context::{LayoutContext, NavigationState};
    use assert_matches::assert_matches;
    use opsdeck_core::{NavItem, ShellError};
    use opsdeck_settings::ColorScheme;

    fn config() -> ShellConfig {
        ShellConfig::new(
            "/hr",
            vec![
                NavSection::new("overview", "Overview").item(NavItem::new("Dashboard", "/hr")),
                NavSection::new("payroll", "Payroll")
                    .item(NavItem::new("Runs", "/hr/payroll"))
                    .item(NavItem::new("Payslips", "/hr/payroll/payslips")),
            ],
        )
        .with_titles("Human Resources", "HR")
        .with_phases(vec![
            WorkflowPhase::new("setup", "Setup"),
            WorkflowPhase::new("process", "Process"),
        ])
        .with_quick_links(vec![QuickLink {
            name: "Run Payroll".to_string(),
            href: "/hr/payroll/new".to_string(),
            icon: "play".to_string(),
            color: AccentColor::Green,
            description: None,
        }])
        .with_workflow_steps(vec![
            WorkflowStep {
                title: "Set up".to_string(),
                description: "Employees".to_string(),
            },
            WorkflowStep {
                title: "Run".to_string(),
                description: "Payroll".to_string(),
            },
        ])
    }

    fn context(config: &ShellConfig, path: &str, scheme: ColorScheme) -> LayoutContext {
        LayoutContext::new(
            NavigationState::initial(config, path),
            ShellCapabilities::detached_with_scheme(scheme),
        )
    }

    #[test]
    fn section_tree_marks_active_item_only() {
        let config = config();
        let ctx = context(&config, "/hr/payroll/payslips/42", ColorScheme::Light);
        let sections = render_section_tree(&RenderScope::new(&ctx), &config.sections).unwrap();

        assert!(!sections[0].active);
        assert!(sections[0].expanded);
        assert!(sections[1].active);
        assert!(sections[1].expanded);
        let active: Vec<_> = sections[1].items.iter().filter(|i| i.active).map(|i| i.href.as_str()).collect();
        assert_eq!(active, vec!["/hr/payroll/payslips"]);
    }

    #[test]
    fn no_item_active_on_unknown_path() {
        let config = config();
        let ctx = context(&config, "/hr/unknown", ColorScheme::Light);
        let sections = render_section_tree(&RenderScope::new(&ctx), &config.sections).unwrap();
        assert!(sections.iter().all(|s| !s.active && s.items.iter().all(|i| !i.active)));
        assert!(!sections[1].expanded);
    }

    #[test]
    fn collapsed_section_still_carries_items() {
        let config = config();
        let ctx = context(&config, "/hr", ColorScheme::Light);
        let sections = render_section_tree(&RenderScope::new(&ctx), &config.sections).unwrap();
        assert!(!sections[1].expanded);
        assert_eq!(sections[1].items.len(), 2);
    }

    #[test]
    fn workflow_indicator_statuses() {
        let config = config();
        let ctx = context(&config, "/hr/payroll", ColorScheme::Light);
        let view = render_workflow_indicator(&RenderScope::new(&ctx), &config.workflow_phases)
            .unwrap()
            .unwrap();
        assert_eq!(view.current, "process");
        assert_eq!(view.current_label.as_deref(), Some("Process"));
        assert_eq!(view.phases[0].status, PhaseStatus::Complete);
        assert_eq!(view.phases[1].status, PhaseStatus::Current);
    }

    #[test]
    fn workflow_indicator_absent_without_phases() {
        let config = config().with_phases(Vec::new());
        let ctx = context(&config, "/hr", ColorScheme::Light);
        let view = render_workflow_indicator(&RenderScope::new(&ctx), &config.workflow_phases).unwrap();
        assert!(view.is_none());
    }

    #[test]
    fn quick_links_follow_scheme() {
        let config = config();
        let light = context(&config, "/hr", ColorScheme::Light);
        let dark = context(&config, "/hr", ColorScheme::Dark);

        let l = render_quick_links(&RenderScope::new(&light), &config.quick_links).unwrap();
        let d = render_quick_links(&RenderScope::new(&dark), &config.quick_links).unwrap();
        assert_eq!(l[0].background, "bg-green-100");
        assert_eq!(d[0].background, "bg-green-900/30");
        assert_eq!(d[0].foreground, "text-green-400");
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let steps = render_workflow_steps(&config().workflow_steps);
        assert_eq!(steps.iter().map(|s| s.number).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(steps[1].title, "Run");
    }

    #[test]
    fn sidebar_composes_parts() {
        let config = config();
        let ctx = context(&config, "/hr", ColorScheme::Light);
        let sidebar = render_sidebar(&RenderScope::new(&ctx), &config).unwrap();
        assert_eq!(sidebar.title, "HR");
        assert!(sidebar.workflow.is_some());
        assert_eq!(sidebar.sections.len(), 2);
        assert_eq!(sidebar.quick_links.len(), 1);
        assert_eq!(sidebar.workflow_steps.len(), 2);
    }

    #[test]
    fn sidebar_outside_shell_fails() {
        let config = config();
        assert_matches!(
            render_sidebar(&RenderScope::detached(), &config),
            Err(ShellError::OutsideShell { component: "WorkflowIndicator" })
        );
        assert_matches!(
            render_section(&RenderScope::detached(), &config.sections[0]),
            Err(ShellError::OutsideShell { component: "NavSection" })
        );
    }
}
