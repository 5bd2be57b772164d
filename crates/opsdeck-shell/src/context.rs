//! Navigation state and the layout context shared with renderers.
//!
//! [`NavigationState`] is the derived, ephemeral state of one mounted shell:
//! which section and item are active, the current workflow phase, and which
//! sections are expanded. It is recomputed from the observed path and owned
//! by the orchestrator.
//!
//! Expansion is monotonic with respect to navigation: a path change may
//! expand the newly active section but never collapses anything. Only an
//! explicit [`toggle_section`](NavigationState::toggle_section) collapses.

use std::collections::BTreeMap;

use opsdeck_core::{PhaseKey, SectionKey, resolve_route};
use opsdeck_settings::ColorScheme;
use serde::Serialize;
use tracing::debug;

use crate::capabilities::ShellCapabilities;
use crate::config::ShellConfig;

// ─────────────────────────────────────────────────────────────────────────────
// NavigationState
// ─────────────────────────────────────────────────────────────────────────────

/// Derived navigation state for one shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// The last observed path.
    pub path: String,
    /// Section holding the active item, if any.
    pub active_section: Option<SectionKey>,
    /// Href of the active item, or empty.
    pub active_href: String,
    /// Current workflow phase, or empty when no phases are configured.
    pub current_phase: PhaseKey,
    /// Expanded/collapsed flag per section key.
    pub open_sections: BTreeMap<SectionKey, bool>,
}

impl NavigationState {
    /// State for a freshly mounted shell at `path`.
    ///
    /// Every configured section gets an entry. The pinned section and the
    /// section matching `path` start expanded; the rest start collapsed.
    pub fn initial(config: &ShellConfig, path: &str) -> Self {
        let mut open_sections: BTreeMap<SectionKey, bool> = config
            .sections
            .iter()
            .map(|section| (section.key.clone(), false))
            .collect();
        if let Some(pinned) = open_sections.get_mut(&config.pinned_section) {
            *pinned = true;
        }

        let mut state = Self {
            path: String::new(),
            active_section: None,
            active_href: String::new(),
            current_phase: PhaseKey::empty(),
            open_sections,
        };
        state.observe_path(config, path);
        state
    }

    /// Recompute derived state for a newly observed path.
    ///
    /// When a section becomes active its entry is forced open; every other
    /// entry keeps its current value.
    pub fn observe_path(&mut self, config: &ShellConfig, path: &str) {
        let route = resolve_route(path, &config.sections, &config.base_route);

        path.clone_into(&mut self.path);
        self.active_section = route.map(|m| m.section.key.clone());
        self.active_href = route.map_or_else(String::new, |m| m.item.href.clone());
        self.current_phase = config.phase_resolver.resolve(
            route.map(|m| (m.section_index, &m.section.key)),
            &config.workflow_phases,
        );

        if let Some(key) = &self.active_section {
            let _ = self.open_sections.insert(key.clone(), true);
        }

        debug!(
            path,
            section = self.active_section.as_ref().map_or("", SectionKey::as_str),
            href = %self.active_href,
            phase = %self.current_phase,
            "navigation resolved"
        );
    }

    /// Flip a section between expanded and collapsed.
    ///
    /// A key without an entry counts as collapsed. Returns the new value.
    pub fn toggle_section(&mut self, key: &str) -> bool {
        let entry = self.open_sections.entry(SectionKey::from(key)).or_insert(false);
        *entry = !*entry;
        debug!(section = key, open = *entry, "section toggled");
        *entry
    }

    /// Whether a section is expanded.
    pub fn is_open(&self, key: &str) -> bool {
        self.open_sections.get(key).copied().unwrap_or(false)
    }

    /// Whether `key` is the active section.
    pub fn is_active_section(&self, key: &str) -> bool {
        self.active_section.as_ref().is_some_and(|active| active == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LayoutContext
// ─────────────────────────────────────────────────────────────────────────────

/// Navigation state plus the capabilities renderers may invoke.
///
/// Owned by the orchestrator; renderers get a shared reference through a
/// [`RenderScope`](crate::render::RenderScope).
#[derive(Debug)]
pub struct LayoutContext {
    state: NavigationState,
    capabilities: ShellCapabilities,
}

impl LayoutContext {
    /// Wrap initial state and capabilities.
    pub fn new(state: NavigationState, capabilities: ShellCapabilities) -> Self {
        Self {
            state,
            capabilities,
        }
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.state
    }

    /// Flip a section between expanded and collapsed.
    pub fn toggle_section(&mut self, key: &str) -> bool {
        self.state.toggle_section(key)
    }

    /// Whether the dark scheme is active.
    pub fn is_dark_mode(&self) -> bool {
        self.capabilities.theme.is_dark_mode()
    }

    /// Active color scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        if self.is_dark_mode() {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Switch to the other color scheme.
    pub fn toggle_theme(&self) {
        let next = self.color_scheme().toggled();
        debug!(scheme = ?next, "theme toggled");
        self.capabilities.theme.set_color_scheme(next);
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.capabilities.session.is_authenticated()
    }

    /// End the session.
    pub fn logout(&self) {
        debug!("logout requested");
        self.capabilities.session.logout();
    }

    /// Open the command palette.
    pub fn open_command_palette(&self) {
        self.capabilities.palette.open();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
