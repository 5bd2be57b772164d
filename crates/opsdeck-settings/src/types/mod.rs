//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]`. Types marked with
//! `#[serde(default)]` allow partial JSON: missing fields get their default
//! value during deserialization.

mod module;
mod ui;

pub use module::*;
pub use ui::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::builtin_modules;
use crate::validate::ConfigIssue;

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "logging": { "level": "debug" },
///   "ui": { "colorScheme": "dark", "defaultModule": "crm" },
///   "modules": { "hr": { "title": "People" } }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpsdeckSettings {
    /// Settings schema version.
    pub version: String,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Shell appearance and behavior.
    pub ui: UiSettings,
    /// Navigation configuration per module, keyed by module key.
    pub modules: BTreeMap<String, ModuleConfig>,
}

impl Default for OpsdeckSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            logging: LoggingSettings::default(),
            ui: UiSettings::default(),
            modules: builtin_modules(),
        }
    }
}

impl OpsdeckSettings {
    /// Look up a module by key.
    pub fn module(&self, key: &str) -> Option<&ModuleConfig> {
        self.modules.get(key)
    }

    /// Validate every module, returning only those with issues.
    pub fn validate(&self) -> BTreeMap<String, Vec<ConfigIssue>> {
        self.modules
            .iter()
            .filter_map(|(key, module)| {
                let issues = module.validate();
                (!issues.is_empty()).then(|| (key.clone(), issues))
            })
            .collect()
    }

    /// Fail on the first module with configuration issues.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        match self.validate().into_iter().next() {
            Some((module, issues)) => Err(crate::SettingsError::InvalidModule { module, issues }),
            None => Ok(()),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level for the stderr subscriber.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
