//! Shell orchestration.
//!
//! [`ShellOrchestrator`] owns one module shell's configuration, layout
//! context and mobile-drawer flag. The host forwards router events to
//! [`navigate`](ShellOrchestrator::navigate) and user interactions to the
//! `toggle_*` methods, then calls [`render`](ShellOrchestrator::render).
//! All updates run synchronously on the caller's thread.

use opsdeck_core::Result;
use tracing::debug;

use crate::capabilities::ShellCapabilities;
use crate::config::ShellConfig;
use crate::context::{LayoutContext, NavigationState};
use crate::render::header::{render_drawer, render_mobile_header, render_top_bar};
use crate::render::sidebar::render_sidebar;
use crate::render::{RenderScope, ShellView};

/// Owner of a mounted module shell.
#[derive(Debug)]
pub struct ShellOrchestrator {
    config: ShellConfig,
    context: LayoutContext,
    mobile_menu_open: bool,
}

impl ShellOrchestrator {
    /// Mount a shell at `path`.
    pub fn new(config: ShellConfig, capabilities: ShellCapabilities, path: &str) -> Self {
        let state = NavigationState::initial(&config, path);
        debug!(
            base_route = %config.base_route,
            sections = config.sections.len(),
            "shell mounted"
        );
        Self {
            config,
            context: LayoutContext::new(state, capabilities),
            mobile_menu_open: false,
        }
    }

    /// Static configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Layout context shared with renderers.
    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        self.context.state()
    }

    /// Whether the mobile drawer is open.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// React to a router event.
    ///
    /// Recomputes the derived state, expands the newly active section and
    /// closes the mobile drawer.
    pub fn navigate(&mut self, path: &str) {
        self.context.state_mut().observe_path(&self.config, path);
        self.mobile_menu_open = false;
    }

    /// Flip a section between expanded and collapsed.
    pub fn toggle_section(&mut self, key: &str) -> bool {
        self.context.toggle_section(key)
    }

    /// Menu button pressed.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Close the mobile drawer.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Switch color scheme through the theme capability.
    pub fn toggle_theme(&self) {
        self.context.toggle_theme();
    }

    /// End the session through the session capability.
    pub fn logout(&self) {
        self.context.logout();
    }

    /// Open the command palette.
    pub fn open_command_palette(&self) {
        self.context.open_command_palette();
    }

    /// Render scope for this shell's renderers.
    pub fn scope(&self) -> RenderScope<'_> {
        RenderScope::new(&self.context)
    }

    /// Compose the full shell view.
    pub fn render(&self) -> Result<ShellView> {
        let scope = self.scope();
        Ok(ShellView {
            mobile_header: render_mobile_header(&self.config, self.mobile_menu_open),
            drawer: render_drawer(&scope, &self.config, self.mobile_menu_open)?,
            top_bar: render_top_bar(&scope, &self.config)?,
            sidebar: render_sidebar(&scope, &self.config)?,
            content_path: self.state().path.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::{NavItem, NavSection, SectionKey};

    fn shell(path: &str) -> ShellOrchestrator {
        let config = ShellConfig::new(
            "/hr",
            vec![
                NavSection::new("overview", "Overview").item(NavItem::new("Dashboard", "/hr")),
                NavSection::new("payroll", "Payroll").item(NavItem::new("Runs", "/hr/payroll")),
            ],
        );
        ShellOrchestrator::new(config, ShellCapabilities::detached(), path)
    }

    #[test]
    fn navigation_closes_drawer() {
        let mut shell = shell("/hr");
        assert!(shell.toggle_mobile_menu());
        assert!(shell.is_mobile_menu_open());

        shell.navigate("/hr/payroll");
        assert!(!shell.is_mobile_menu_open());
        assert_eq!(
            shell.state().active_section.as_ref().map(SectionKey::as_str),
            Some("payroll")
        );
    }

    #[test]
    fn menu_button_toggles() {
        let mut shell = shell("/hr");
        assert!(shell.toggle_mobile_menu());
        assert!(!shell.toggle_mobile_menu());
        let _ = shell.toggle_mobile_menu();
        shell.close_mobile_menu();
        assert!(!shell.is_mobile_menu_open());
    }

    #[test]
    fn render_includes_drawer_only_when_open() {
        let mut shell = shell("/hr");
        assert!(shell.render().unwrap().drawer.is_none());
        let _ = shell.toggle_mobile_menu();
        let view = shell.render().unwrap();
        assert!(view.drawer.is_some());
        assert!(view.mobile_header.menu_open);
    }

    #[test]
    fn render_content_path_tracks_navigation() {
        let mut shell = shell("/hr");
        shell.navigate("/hr/payroll/77");
        assert_eq!(shell.render().unwrap().content_path, "/hr/payroll/77");
    }

    #[test]
    fn theme_toggle_through_orchestrator() {
        let shell = shell("/hr");
        assert!(!shell.context().is_dark_mode());
        shell.toggle_theme();
        assert!(shell.context().is_dark_mode());
    }
}
