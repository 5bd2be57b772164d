//! Settings error types.

use thiserror::Error;

use crate::validate::ConfigIssue;

/// Errors that can occur when loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse JSON in the settings file.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A settings value was invalid.
    #[error("invalid settings value: {0}")]
    InvalidValue(String),
    /// A module's navigation configuration is inconsistent.
    #[error("module {module} has {} configuration issue(s): {}", issues.len(), join_issues(issues))]
    InvalidModule {
        /// Module key.
        module: String,
        /// Everything validation found wrong.
        issues: Vec<ConfigIssue>,
    },
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn io_error_display() {
        let err = SettingsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let err: SettingsError = json_err.into();
        assert_matches!(err, SettingsError::Json(_));
        assert!(err.to_string().contains("parse settings JSON"));
    }

    #[test]
    fn invalid_value_display() {
        let err = SettingsError::InvalidValue("colorScheme must be light or dark".to_string());
        assert_eq!(
            err.to_string(),
            "invalid settings value: colorScheme must be light or dark"
        );
    }

    #[test]
    fn invalid_module_lists_issues() {
        let err = SettingsError::InvalidModule {
            module: "hr".to_string(),
            issues: vec![ConfigIssue::EmptySections, ConfigIssue::DuplicateHref("/hr".into())],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("module hr has 2 configuration issue(s): "));
        assert!(msg.contains("no sections"));
        assert!(msg.contains("/hr"));
    }
}
