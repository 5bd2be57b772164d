//! Shell error types.
//!
//! Navigation lookups never fail: a path with no matching route resolves to
//! `None`, an empty href, or the first workflow phase. The variants here cover
//! integration mistakes made by the host, not runtime conditions.

use thiserror::Error;

/// Errors surfaced by the navigation shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A renderer asked for the layout context outside an orchestrator scope.
    #[error("{component} must be rendered inside a module shell")]
    OutsideShell {
        /// Name of the component that asked.
        component: &'static str,
    },
    /// No module with this key is configured.
    #[error("unknown module: {0}")]
    UnknownModule(String),
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_shell_display() {
        let err = ShellError::OutsideShell {
            component: "SectionTree",
        };
        assert_eq!(
            err.to_string(),
            "SectionTree must be rendered inside a module shell"
        );
    }

    #[test]
    fn unknown_module_display() {
        let err = ShellError::UnknownModule("payroll".to_string());
        assert_eq!(err.to_string(), "unknown module: payroll");
    }
}
