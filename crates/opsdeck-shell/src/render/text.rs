//! Plain-text rendering of a [`ShellView`] for terminals.
//!
//! Collapsed sections show their heading only. The active section is marked
//! with `*` and the active item with `›`.

use std::fmt::Write;

use crate::render::ShellView;
use crate::render::sidebar::{PhaseStatus, SidebarView};

/// Render the shell as indented text.
pub fn render_text(view: &ShellView) -> String {
    let mut out = String::new();

    let bar = &view.top_bar;
    let session = if bar.show_logout { "logout" } else { "signed out" };
    let _ = writeln!(
        out,
        "{}  [{:?}] [search {}] [{}]",
        bar.title, bar.color_scheme, bar.search_shortcut, session
    );

    if view.mobile_header.menu_open {
        out.push_str("menu: open\n");
    }

    let sidebar = view.drawer.as_ref().map_or(&view.sidebar, |d| &d.sidebar);
    render_sidebar_text(&mut out, sidebar);

    let _ = writeln!(out, "content: {}", view.content_path);
    out
}

fn render_sidebar_text(out: &mut String, sidebar: &SidebarView) {
    let _ = writeln!(out, "{}", sidebar.title);

    if let Some(workflow) = &sidebar.workflow {
        let phases: Vec<String> = workflow
            .phases
            .iter()
            .map(|p| {
                let mark = match p.status {
                    PhaseStatus::Complete => "✓",
                    PhaseStatus::Current => "●",
                    PhaseStatus::Upcoming => "○",
                };
                format!("{mark} {}", p.label)
            })
            .collect();
        let _ = writeln!(out, "workflow: {}", phases.join(" → "));
    }

    for section in &sidebar.sections {
        let arrow = if section.expanded { "▾" } else { "▸" };
        let active = if section.active { " *" } else { "" };
        if section.description.is_empty() {
            let _ = writeln!(out, "{arrow} {}{active}", section.label);
        } else {
            let _ = writeln!(out, "{arrow} {} · {}{active}", section.label, section.description);
        }
        if !section.expanded {
            continue;
        }
        for item in &section.items {
            let marker = if item.active { "›" } else { " " };
            let _ = writeln!(out, "  {marker} {}  {}", item.name, item.href);
        }
    }

    if !sidebar.quick_links.is_empty() {
        out.push_str("quick links:\n");
        for link in &sidebar.quick_links {
            let _ = writeln!(out, "  [{}] {}  {}", link.foreground, link.name, link.href);
        }
    }

    if !sidebar.workflow_steps.is_empty() {
        out.push_str("steps:\n");
        for step in &sidebar.workflow_steps {
            let _ = writeln!(out, "  {}. {}: {}", step.number, step.title, step.description);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
