//! # opsdeck-shell
//!
//! The chrome around a module's pages: header, sidebar and mobile drawer,
//! plus the navigation state that decides what they highlight.
//!
//! - [`config::ShellConfig`]: static per-module configuration
//! - [`phase::PhaseResolver`]: maps the active section to a workflow phase
//! - [`context::NavigationState`] / [`context::LayoutContext`]: derived
//!   state, open sections, and the injected capabilities
//! - [`capabilities`]: theme, session and command-palette seams
//! - [`orchestrator::ShellOrchestrator`]: owns the context and reacts to
//!   navigation
//! - [`render`]: view models for header, sidebar and drawer, plus a text
//!   renderer
//!
//! # Usage
//!
//! ```ignore
//! let module = settings.module("hr").unwrap();
//! let config = ShellConfig::from_module(module, &settings.ui.pinned_section);
//! let mut shell = ShellOrchestrator::new(config, ShellCapabilities::detached(), "/hr");
//! shell.navigate("/hr/payroll/payslips/42");
//! println!("{}", render::text::render_text(&shell.render()?));
//! ```

#![deny(unsafe_code)]

pub mod capabilities;
pub mod config;
pub mod context;
pub mod orchestrator;
pub mod phase;
pub mod render;

pub use capabilities::{CommandPalette, SessionControl, ShellCapabilities, ThemeControl};
pub use config::ShellConfig;
pub use context::{LayoutContext, NavigationState};
pub use orchestrator::ShellOrchestrator;
pub use phase::PhaseResolver;
pub use render::{RenderScope, ShellView};
