//! Presentational view models.
//!
//! Renderers are pure functions from the layout context and static
//! configuration to serializable view structs. They read the context through
//! a [`RenderScope`]; asking a detached scope for it is a wiring mistake and
//! fails immediately with [`ShellError::OutsideShell`].
//!
//! [`text::render_text`] turns a [`ShellView`] into an indented tree for the
//! terminal.

pub mod header;
pub mod sidebar;
pub mod text;

use opsdeck_core::{Result, ShellError};
use serde::Serialize;

use crate::context::LayoutContext;

pub use header::{DrawerView, MobileHeaderView, TopBarView};
pub use sidebar::{
    ItemView, PhaseStatus, PhaseView, QuickLinkView, SectionView, SidebarView, WorkflowIndicatorView,
    WorkflowStepView,
};

/// Access to the layout context for renderers.
#[derive(Clone, Copy, Debug)]
pub struct RenderScope<'a> {
    layout: Option<&'a LayoutContext>,
}

impl<'a> RenderScope<'a> {
    /// Scope inside an orchestrator.
    pub fn new(layout: &'a LayoutContext) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    /// Scope with no orchestrator above it.
    pub fn detached() -> Self {
        Self { layout: None }
    }

    /// The layout context, or [`ShellError::OutsideShell`] naming `component`.
    pub fn layout(&self, component: &'static str) -> Result<&'a LayoutContext> {
        self.layout.ok_or(ShellError::OutsideShell { component })
    }
}

/// The whole shell: chrome around the content slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    /// Header shown on narrow screens.
    pub mobile_header: MobileHeaderView,
    /// Slide-in drawer, present only while open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<DrawerView>,
    /// Desktop top bar.
    pub top_bar: TopBarView,
    /// Desktop sidebar.
    pub sidebar: SidebarView,
    /// Path of the page rendered in the content slot.
    pub content_path: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn detached_scope_fails_with_component_name() {
        let scope = RenderScope::detached();
        assert_matches!(
            scope.layout("SectionTree"),
            Err(ShellError::OutsideShell { component: "SectionTree" })
        );
    }
}
