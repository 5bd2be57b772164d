//! # opsdeck-cli
//!
//! Command surface of the `opsdeck` binary. Each command is a function from
//! loaded settings to the text it prints, so tests drive them without a
//! process boundary.

#![deny(unsafe_code)]

use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use opsdeck_core::ShellError;
use opsdeck_settings::{ColorScheme, OpsdeckSettings, parse_log_level, read_settings, settings_path};
use opsdeck_shell::render::text::render_text;
use opsdeck_shell::{ShellCapabilities, ShellConfig, ShellOrchestrator};
use tracing::{debug, info};

/// OpsDeck navigation shell tools.
#[derive(Parser, Debug)]
#[command(name = "opsdeck", version, about = "Resolve and render OpsDeck module shells")]
pub struct Cli {
    /// Settings file (defaults to `~/.opsdeck/settings.json`).
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log level (`trace`, `debug`, `info`, `warn`, `error`); overrides the
    /// settings file.
    #[arg(long, global = true, value_parser = parse_level_arg)]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

fn parse_level_arg(val: &str) -> std::result::Result<String, String> {
    parse_log_level(val)
        .map(str::to_string)
        .ok_or_else(|| format!("unknown log level `{val}`; expected trace, debug, info, warn or error"))
}

/// Log line format on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List configured modules.
    Modules,
    /// Print the navigation state for a path as JSON.
    Resolve {
        /// Module key, e.g. `hr`.
        module: String,
        /// Route path, e.g. `/hr/payroll`.
        path: String,
    },
    /// Print the shell for a path as text.
    Render {
        /// Module key, e.g. `hr`.
        module: String,
        /// Route path, e.g. `/hr/payroll`.
        path: String,
        /// Render with the dark color scheme.
        #[arg(long)]
        dark: bool,
        /// Render with the mobile drawer open.
        #[arg(long)]
        menu_open: bool,
    },
    /// Validate every module's configuration.
    Check,
}

/// Load settings from `path`, or the default location.
///
/// Configuration issues are not logged here; see
/// [`opsdeck_settings::report_issues`].
pub fn load(path: Option<&Path>) -> Result<OpsdeckSettings> {
    let path = path.map_or_else(settings_path, Path::to_path_buf);
    read_settings(&path).with_context(|| format!("failed to load settings from {}", path.display()))
}

/// Run `command` against `settings`, returning what to print.
pub fn run(command: &Command, settings: &OpsdeckSettings) -> Result<String> {
    match command {
        Command::Modules => Ok(list_modules(settings)),
        Command::Resolve { module, path } => resolve(settings, module, path),
        Command::Render {
            module,
            path,
            dark,
            menu_open,
        } => render(settings, module, path, *dark, *menu_open),
        Command::Check => check(settings),
    }
}

/// One line per module: key, base route, title.
pub fn list_modules(settings: &OpsdeckSettings) -> String {
    let width = settings.modules.keys().map(String::len).max().unwrap_or(0);
    settings
        .modules
        .iter()
        .map(|(key, module)| {
            let marker = if *key == settings.ui.default_module { "*" } else { " " };
            format!("{marker} {key:<width$}  {:<16}  {}\n", module.base_route, module.title)
        })
        .collect()
}

/// Navigation state for `path` in `module`, as pretty JSON.
pub fn resolve(settings: &OpsdeckSettings, module: &str, path: &str) -> Result<String> {
    let shell = mount(settings, module, path, settings.ui.color_scheme)?;
    Ok(serde_json::to_string_pretty(shell.state())?)
}

/// Text rendering of the shell for `path` in `module`.
pub fn render(settings: &OpsdeckSettings, module: &str, path: &str, dark: bool, menu_open: bool) -> Result<String> {
    let scheme = if dark { ColorScheme::Dark } else { settings.ui.color_scheme };
    let mut shell = mount(settings, module, path, scheme)?;
    if menu_open {
        let _ = shell.toggle_mobile_menu();
    }
    let view = shell.render().context("failed to render shell")?;
    Ok(render_text(&view))
}

/// Report every configuration issue; fails when any module has one.
pub fn check(settings: &OpsdeckSettings) -> Result<String> {
    if settings.module(&settings.ui.default_module).is_none() {
        bail!(
            "default module {:?} is not configured",
            settings.ui.default_module
        );
    }
    settings.ensure_valid().with_context(|| {
        let issues = settings.validate();
        let mut report = String::new();
        for (module, found) in &issues {
            for issue in found {
                let _ = writeln!(report, "{module}: {issue}");
            }
        }
        let count: usize = issues.values().map(Vec::len).sum();
        let _ = write!(report, "{count} issue(s) in {} module(s)", issues.len());
        report
    })?;
    info!(modules = settings.modules.len(), "configuration valid");
    Ok(format!("{} module(s) ok\n", settings.modules.len()))
}

fn mount(settings: &OpsdeckSettings, module: &str, path: &str, scheme: ColorScheme) -> Result<ShellOrchestrator> {
    let config = settings
        .module(module)
        .ok_or_else(|| ShellError::UnknownModule(module.to_string()))?;
    debug!(module, path, "mounting shell");
    Ok(ShellOrchestrator::new(
        ShellConfig::from_module(config, &settings.ui.pinned_section),
        ShellCapabilities::detached_with_scheme(scheme),
        path,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from(["opsdeck", "render", "hr", "/hr/payroll", "--dark", "--menu-open"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Render {
                module: "hr".to_string(),
                path: "/hr/payroll".to_string(),
                dark: true,
                menu_open: true,
            }
        );
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "opsdeck",
            "check",
            "--settings",
            "/tmp/s.json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Check);
        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn log_level_flag_is_normalized() {
        let cli = Cli::try_parse_from(["opsdeck", "modules", "--log-level", "WARNING"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn unknown_log_level_flag_rejected() {
        let err = Cli::try_parse_from(["opsdeck", "modules", "--log-level", "verbose"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn resolve_requires_path() {
        assert!(Cli::try_parse_from(["opsdeck", "resolve", "hr"]).is_err());
    }

    #[test]
    fn modules_marks_default() {
        let out = list_modules(&OpsdeckSettings::default());
        assert_eq!(out.lines().count(), 5);
        let hr = out.lines().find(|l| l.contains("/hr ")).unwrap();
        assert!(hr.starts_with("* hr"));
        assert!(hr.ends_with("Human Resources"));
    }

    #[test]
    fn unknown_module_is_an_error() {
        let err = resolve(&OpsdeckSettings::default(), "payroll", "/payroll").unwrap_err();
        assert_eq!(err.to_string(), "unknown module: payroll");
    }
}
