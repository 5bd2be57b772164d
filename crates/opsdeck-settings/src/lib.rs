//! # opsdeck-settings
//!
//! Configuration management with layered sources for the OpsDeck shell.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`OpsdeckSettings::default()`], including the
//!    built-in module catalog
//! 2. **User file**: `~/.opsdeck/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `OPSDECK_*` overrides (highest priority)
//!
//! Each module's navigation (sections, phases, quick links, workflow steps)
//! lives under `modules.<key>` and is validated after loading.
//!
//! # Usage
//!
//! ```no_run
//! use opsdeck_settings::load_settings;
//!
//! let settings = load_settings()?;
//! println!("default module: {}", settings.ui.default_module);
//! # Ok::<(), opsdeck_settings::SettingsError>(())
//! ```

#![deny(unsafe_code)]

pub mod catalog;
pub mod errors;
pub mod loader;
pub mod types;
pub mod validate;

pub use catalog::builtin_modules;
pub use errors::{Result, SettingsError};
pub use loader::{
    deep_merge, load_settings, load_settings_from_path, parse_log_level, read_settings, report_issues,
    settings_path,
};
pub use types::*;
pub use validate::ConfigIssue;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
