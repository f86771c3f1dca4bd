use anyhow::{bail, Result};
use twyg::{LogLevel, OptsBuilder, Output};

use crate::config::LoggingConfig;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// The configured level raised by one step per `-v`, capped at "trace".
fn effective_level(configured: &str, verbosity: u8) -> Result<&'static str> {
    let Some(base) = LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(configured.trim()))
    else {
        bail!(
            "Unknown log level {:?}\n\nValid levels: {}",
            configured,
            LEVELS.join(", ")
        );
    };
    let index = (base + usize::from(verbosity)).min(LEVELS.len() - 1);
    Ok(LEVELS[index])
}

fn to_twyg(level: &str) -> LogLevel {
    match level {
        "error" => LogLevel::Error,
        "warn" => LogLevel::Warn,
        "info" => LogLevel::Info,
        "debug" => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Install the global logger. Output goes to stderr so that stdout only
/// carries generated LaTeX.
pub fn init(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    let level = effective_level(&config.level, verbosity)?;

    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .level(to_twyg(level))
        .output(Output::Stderr)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logging: {e:?}"))?;

    log::debug!("Logging at level {}", level);
    Ok(())
}
