//! Header renderers: mobile header, mobile drawer and desktop top bar.

use opsdeck_core::Result;
use opsdeck_settings::ColorScheme;
use serde::Serialize;

use crate::config::ShellConfig;
use crate::render::RenderScope;
use crate::render::sidebar::{SidebarView, render_sidebar};

/// Keyboard shortcut advertised next to the search trigger.
pub const SEARCH_SHORTCUT: &str = "Ctrl+K";

/// Header shown on narrow screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileHeaderView {
    /// Module title.
    pub title: String,
    /// Whether the drawer is open (menu button shows a close icon).
    pub menu_open: bool,
}

/// Slide-in drawer holding the sidebar on narrow screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    /// Same content as the desktop sidebar.
    pub sidebar: SidebarView,
}

/// Desktop top bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBarView {
    /// Module title.
    pub title: String,
    /// Active color scheme.
    pub color_scheme: ColorScheme,
    /// Label for the theme toggle, naming the scheme it switches to.
    pub theme_toggle_label: String,
    /// Whether the logout control is shown.
    pub show_logout: bool,
    /// Search trigger shortcut.
    pub search_shortcut: &'static str,
}

/// Render the mobile header.
pub fn render_mobile_header(config: &ShellConfig, menu_open: bool) -> MobileHeaderView {
    MobileHeaderView {
        title: config.module_title.clone(),
        menu_open,
    }
}

/// Render the drawer; `None` while closed.
pub fn render_drawer(scope: &RenderScope<'_>, config: &ShellConfig, open: bool) -> Result<Option<DrawerView>> {
    if !open {
        return Ok(None);
    }
    Ok(Some(DrawerView {
        sidebar: render_sidebar(scope, config)?,
    }))
}

/// Render the desktop top bar.
pub fn render_top_bar(scope: &RenderScope<'_>, config: &ShellConfig) -> Result<TopBarView> {
    let layout = scope.layout("TopBar")?;
    let color_scheme = layout.color_scheme();
    let theme_toggle_label = match color_scheme.toggled() {
        ColorScheme::Light => "Switch to light mode",
        ColorScheme::Dark => "Switch to dark mode",
    };
    Ok(TopBarView {
        title: config.module_title.clone(),
        color_scheme,
        theme_toggle_label: theme_toggle_label.to_string(),
        show_logout: layout.is_authenticated(),
        search_shortcut: SEARCH_SHORTCUT,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ShellCapabilities;
    use crate::context::{LayoutContext, NavigationState};
    use opsdeck_core::{NavItem, NavSection};

    fn config() -> ShellConfig {
        ShellConfig::new(
            "/crm",
            vec![NavSection::new("overview", "Overview").item(NavItem::new("Dashboard", "/crm"))],
        )
        .with_titles("Customer Relationships", "CRM")
    }

    #[test]
    fn top_bar_reflects_scheme_and_session() {
        let config = config();
        let ctx = LayoutContext::new(
            NavigationState::initial(&config, "/crm"),
            ShellCapabilities::detached_with_scheme(ColorScheme::Dark),
        );
        let bar = render_top_bar(&RenderScope::new(&ctx), &config).unwrap();
        assert_eq!(bar.title, "Customer Relationships");
        assert_eq!(bar.color_scheme, ColorScheme::Dark);
        assert_eq!(bar.theme_toggle_label, "Switch to light mode");
        assert!(!bar.show_logout);
    }

    #[test]
    fn drawer_only_when_open() {
        let config = config();
        let ctx = LayoutContext::new(
            NavigationState::initial(&config, "/crm"),
            ShellCapabilities::detached(),
        );
        let scope = RenderScope::new(&ctx);
        assert!(render_drawer(&scope, &config, false).unwrap().is_none());
        let drawer = render_drawer(&scope, &config, true).unwrap().unwrap();
        assert_eq!(drawer.sidebar.title, "CRM");
    }

    #[test]
    fn closed_drawer_needs_no_context() {
        assert!(render_drawer(&RenderScope::detached(), &config(), false).unwrap().is_none());
        assert!(render_drawer(&RenderScope::detached(), &config(), true).is_err());
    }

    #[test]
    fn mobile_header_title() {
        let header = render_mobile_header(&config(), true);
        assert_eq!(header.title, "Customer Relationships");
        assert!(header.menu_open);
    }
}
