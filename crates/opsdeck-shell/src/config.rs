//! Static shell configuration.

use opsdeck_core::{NavSection, SectionKey, WorkflowPhase};
use opsdeck_settings::{ModuleConfig, QuickLink, WorkflowStep};

use crate::phase::PhaseResolver;

/// Everything that determines one module shell's navigation behavior.
///
/// Built once per module mount and never mutated by the shell.
#[derive(Clone, Debug, Default)]
pub struct ShellConfig {
    /// Module title shown in the top bar and mobile header.
    pub module_title: String,
    /// Title shown above the sidebar tree.
    pub sidebar_title: String,
    /// Root route of the module.
    pub base_route: String,
    /// Sidebar sections in display order.
    pub sections: Vec<NavSection>,
    /// Workflow phases in display order.
    pub workflow_phases: Vec<WorkflowPhase>,
    /// How the active section maps onto a phase.
    pub phase_resolver: PhaseResolver,
    /// Optional quick-links grid.
    pub quick_links: Vec<QuickLink>,
    /// Optional numbered workflow legend.
    pub workflow_steps: Vec<WorkflowStep>,
    /// Section expanded on mount regardless of the path.
    pub pinned_section: SectionKey,
}

impl ShellConfig {
    /// Minimal configuration: sections under a base route.
    pub fn new(base_route: impl Into<String>, sections: Vec<NavSection>) -> Self {
        Self {
            base_route: base_route.into(),
            sections,
            pinned_section: SectionKey::from("overview"),
            ..Self::default()
        }
    }

    /// Build from a module's settings entry.
    ///
    /// A configured `phaseMap` becomes a [`PhaseResolver::Table`]; otherwise
    /// phases are matched positionally.
    pub fn from_module(module: &ModuleConfig, pinned_section: &str) -> Self {
        let phase_resolver = module
            .phase_map
            .clone()
            .map_or(PhaseResolver::Positional, PhaseResolver::Table);
        Self {
            module_title: module.title.clone(),
            sidebar_title: module.effective_sidebar_title().to_string(),
            base_route: module.base_route.clone(),
            sections: module.sections.clone(),
            workflow_phases: module.workflow_phases.clone(),
            phase_resolver,
            quick_links: module.quick_links.clone(),
            workflow_steps: module.workflow_steps.clone(),
            pinned_section: SectionKey::from(pinned_section),
        }
    }

    /// Set both titles.
    #[must_use]
    pub fn with_titles(mut self, module_title: impl Into<String>, sidebar_title: impl Into<String>) -> Self {
        self.module_title = module_title.into();
        self.sidebar_title = sidebar_title.into();
        self
    }

    /// Set the workflow phases.
    #[must_use]
    pub fn with_phases(mut self, phases: Vec<WorkflowPhase>) -> Self {
        self.workflow_phases = phases;
        self
    }

    /// Set the phase resolver.
    #[must_use]
    pub fn with_phase_resolver(mut self, resolver: PhaseResolver) -> Self {
        self.phase_resolver = resolver;
        self
    }

    /// Set the quick links.
    #[must_use]
    pub fn with_quick_links(mut self, links: Vec<QuickLink>) -> Self {
        self.quick_links = links;
        self
    }

    /// Set the workflow legend.
    #[must_use]
    pub fn with_workflow_steps(mut self, steps: Vec<WorkflowStep>) -> Self {
        self.workflow_steps = steps;
        self
    }

    /// Set the pinned section key.
    #[must_use]
    pub fn with_pinned_section(mut self, key: impl Into<SectionKey>) -> Self {
        self.pinned_section = key.into();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use opsdeck_settings::builtin_modules;

    #[test]
    fn new_pins_overview() {
        let config = ShellConfig::new("/hr", Vec::new());
        assert_eq!(config.pinned_section, "overview");
        assert_matches!(config.phase_resolver, PhaseResolver::Positional);
    }

    #[test]
    fn from_module_with_phase_map_uses_table() {
        let modules = builtin_modules();
        let config = ShellConfig::from_module(&modules["hr"], "overview");
        assert_eq!(config.base_route, "/hr");
        assert_eq!(config.module_title, "Human Resources");
        assert_eq!(config.sidebar_title, "HR & Payroll");
        assert_matches!(config.phase_resolver, PhaseResolver::Table(ref t) if t.len() == 5);
    }

    #[test]
    fn from_module_without_phase_map_is_positional() {
        let modules = builtin_modules();
        let config = ShellConfig::from_module(&modules["crm"], "pipeline");
        assert_eq!(config.pinned_section, "pipeline");
        assert_matches!(config.phase_resolver, PhaseResolver::Positional);
        assert_eq!(config.quick_links.len(), 4);
    }
}
