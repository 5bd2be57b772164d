//! `opsdeck` binary entry point.

#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use opsdeck_cli::{Cli, LogFormat, load, run};
use opsdeck_core::logging::{init_json_subscriber, init_subscriber};
use opsdeck_settings::report_issues;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load(cli.settings.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&settings.logging.level);
    match cli.log_format {
        LogFormat::Text => init_subscriber(level),
        LogFormat::Json => init_json_subscriber(level),
    }
    report_issues(&settings);

    print!("{}", run(&cli.command, &settings)?);
    Ok(())
}
