//! # opsdeck-core
//!
//! Foundation types and pure functions for the OpsDeck navigation shell.
//!
//! This crate provides the shared vocabulary that the settings and shell
//! crates depend on:
//!
//! - **Keys**: `SectionKey` and `PhaseKey` as string newtypes for type safety
//! - **Navigation model**: `NavItem`, `NavSection`, `WorkflowPhase`
//! - **Path matcher**: `is_active_path`, `get_active_section`, `get_active_href`
//! - **Errors**: `ShellError` via `thiserror`
//! - **Logging**: `tracing` subscriber setup and test capture utilities

#![deny(unsafe_code)]

pub mod errors;
pub mod keys;
pub mod logging;
pub mod matcher;
pub mod nav;

pub use errors::{Result, ShellError};
pub use keys::{PhaseKey, SectionKey};
pub use matcher::{RouteMatch, get_active_href, get_active_section, is_active_path, resolve_route};
pub use nav::{NavItem, NavSection, WorkflowPhase};
