//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`OpsdeckSettings::default()`]
//! 2. If `~/.opsdeck/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `OPSDECK_*` environment variable overrides (highest priority)
//! 4. Validate every module and log issues at `warn`
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)
//!
//! Because arrays replace, overriding `modules.hr.sections` swaps the whole
//! section list while `modules.hr.title` alone leaves the sections intact.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::{ColorScheme, OpsdeckSettings};

/// Resolve the path to the settings file (`~/.opsdeck/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".opsdeck").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<OpsdeckSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults; a file with invalid JSON is an error.
/// Module configuration issues are logged, not returned; call
/// [`OpsdeckSettings::ensure_valid`] to turn them into an error.
pub fn load_settings_from_path(path: &Path) -> Result<OpsdeckSettings> {
    let settings = read_settings(path)?;
    report_issues(&settings);
    Ok(settings)
}

/// Merge the file at `path` over defaults and apply env overrides, without
/// logging configuration issues.
///
/// For callers that install their subscriber only after the log level is
/// known; they call [`report_issues`] once it is.
///
/// The resulting `logging.level` is normalized through [`parse_log_level`];
/// an unrecognized level is an [`SettingsError::InvalidValue`].
pub fn read_settings(path: &Path) -> Result<OpsdeckSettings> {
    let mut settings = load_merged(path)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    normalize_log_level(&mut settings)?;
    Ok(settings)
}

fn normalize_log_level(settings: &mut OpsdeckSettings) -> Result<()> {
    let level = parse_log_level(&settings.logging.level).ok_or_else(|| {
        SettingsError::InvalidValue(format!(
            "logging.level must be one of trace, debug, info, warn, error (got {:?})",
            settings.logging.level
        ))
    })?;
    settings.logging.level = level.to_string();
    Ok(())
}

fn load_merged(path: &Path) -> Result<OpsdeckSettings> {
    let defaults = serde_json::to_value(OpsdeckSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Log every module configuration issue, and a missing default module, at `warn`.
pub fn report_issues(settings: &OpsdeckSettings) {
    for (module, issues) in settings.validate() {
        for issue in issues {
            warn!(module = %module, issue = %issue, "module configuration issue");
        }
    }
    if settings.module(&settings.ui.default_module).is_none() {
        warn!(
            module = %settings.ui.default_module,
            "default module is not configured"
        );
    }
}

/// Recursive deep merge of two JSON values.
///
/// Objects merge per key, everything else is replaced by `source`, and
/// nulls in `source` leave `target` untouched.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_val) => deep_merge(target_val, source_val),
                    None => source_val,
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Recognized variables:
/// - `OPSDECK_LOG_LEVEL`: `trace`/`debug`/`info`/`warn`/`error`
/// - `OPSDECK_COLOR_SCHEME`: `light`/`dark`
/// - `OPSDECK_DEFAULT_MODULE`: any non-empty module key
/// - `OPSDECK_PINNED_SECTION`: any non-empty section key
///
/// Invalid values are ignored with a warning.
pub fn apply_env_overrides<F>(settings: &mut OpsdeckSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = read_parsed(&lookup, "OPSDECK_LOG_LEVEL", parse_log_level) {
        settings.logging.level = v.to_string();
    }
    if let Some(v) = read_parsed(&lookup, "OPSDECK_COLOR_SCHEME", ColorScheme::parse) {
        settings.ui.color_scheme = v;
    }
    if let Some(v) = read_string(&lookup, "OPSDECK_DEFAULT_MODULE") {
        settings.ui.default_module = v;
    }
    if let Some(v) = read_string(&lookup, "OPSDECK_PINNED_SECTION") {
        settings.ui.pinned_section = v;
    }
}

/// Normalize a log level name.
///
/// Accepts (case-insensitive) `trace`, `debug`, `info`, `warn`/`warning`,
/// `error`.
pub fn parse_log_level(val: &str) -> Option<&'static str> {
    match val.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

// ── Env var readers (thin wrappers) ─────────────────────────────────────────

fn read_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.is_empty())
}

fn read_parsed<F, T>(lookup: &F, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let val = lookup(name)?;
    let result = parse(&val);
    if result.is_none() {
        warn!(key = name, value = %val, "invalid env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
