use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_path = config::config_file_path();

    println!("# Config file: {}", config_path.display());
    if !config_path.exists() {
        println!("# (file does not exist, using defaults)");
    }
    println!("# Priority: CLI args > ENV vars (SONGBOOK_*) > Config file > Defaults\n");

    let rendered = toml::to_string_pretty(&config)
        .context("Failed to render configuration")?;
    print!("{}", rendered);

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();

    if config::ensure_config_file(&config_path)? {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure songbook.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
