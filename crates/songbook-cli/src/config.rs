use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for songbook.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SONGBOOK_* prefix)
/// 3. Config file (~/.config/songbook/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of chord diagrams per row when inserting chords into a song.
    ///
    /// Can be set via:
    /// - CLI: insertchords -n 5
    /// - ENV: SONGBOOK_CHORDS_PER_LINE
    /// - Config: chords_per_line = 5
    /// - Default: 6
    #[serde(deserialize_with = "native_or_string")]
    pub chords_per_line: usize,

    /// Also define sharp-rooted chords under their flat name (G#m and Abm).
    ///
    /// Can be set via:
    /// - CLI: makechords --no-aliases
    /// - ENV: SONGBOOK_EXPAND_ALIASES
    /// - Config: expand_aliases = false
    /// - Default: true
    #[serde(deserialize_with = "native_or_string")]
    pub expand_aliases: bool,

    pub logging: LoggingConfig,
}

/// Log output settings. Logs always go to stderr, stdout carries the LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "error", "warn", "info", "debug", "trace".
    pub level: String,
    #[serde(deserialize_with = "native_or_string")]
    pub coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chords_per_line: 6,
            expand_aliases: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
            coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (if it exists) and environment
    /// variables with the SONGBOOK_ prefix.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("songbook");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        builder.build()
            .context("Failed to build configuration")
    }
}

/// Accept either the TOML type or its string form. Values taken from
/// SONGBOOK_* variables always arrive as strings.
fn native_or_string<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value<T> {
        Native(T),
        Text(String),
    }

    match Value::<T>::deserialize(deserializer)? {
        Value::Native(value) => Ok(value),
        Value::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid value {text:?}: {e}"))),
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/songbook/config.toml
/// - macOS: ~/Library/Application Support/songbook/config.toml
/// - Windows: %APPDATA%\songbook\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("songbook")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Songbook Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SONGBOOK_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Number of chord diagrams printed per row under a song title
#
# Can also be set via:
# - CLI: songbook insertchords -n 5 song.tex
# - Environment: SONGBOOK_CHORDS_PER_LINE=5
chords_per_line = 6

# Define chords rooted on a sharp under their flat name as well,
# so that both \printGsharpm and \printAbm exist
#
# Can also be set via:
# - CLI: songbook makechords --no-aliases guitar.ini
expand_aliases = true

[logging]
# error, warn, info, debug or trace; each -v raises it one step
level = "warn"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
