//! `siddes config`: locate and validate the engine config.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use siddes_suggest::SuggestConfig;
use tracing::debug;

use crate::exit_codes::EXIT_CONFIG;
use crate::CliError;

/// Overrides the default config location.
pub const CONFIG_ENV: &str = "SIDDES_SUGGEST_CONFIG";

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate a suggest config without running
    #[command(after_help = "\
Examples:
  siddes config validate suggest.toml
  siddes config validate")]
    Validate {
        /// Config file. Defaults to $SIDDES_SUGGEST_CONFIG, then the user config dir
        config: Option<PathBuf>,
    },

    /// Print the default config file path
    Path,
}

pub fn cmd_config(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Validate { config } => cmd_config_validate(config),
        ConfigCommands::Path => {
            println!("{}", default_config_path().display());
            Ok(())
        }
    }
}

/// `<config_dir>/siddes/suggest.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("siddes")
        .join("suggest.toml")
}

/// Config file to use: explicit flag, then `$SIDDES_SUGGEST_CONFIG`, then the
/// default path if it exists. `None` means built-in defaults.
pub fn locate_config(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    if let Some(env_path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(env_path));
    }
    let default = default_config_path();
    default.exists().then_some(default)
}

fn load_config_file(path: &Path) -> Result<SuggestConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CliError::new(EXIT_CONFIG, format!("cannot read config {}: {e}", path.display()))
    })?;
    SuggestConfig::from_toml(&text).map_err(|e| {
        CliError::from(e).with_hint(format!("while loading {}", path.display()))
    })
}

pub fn resolve_config(explicit: Option<PathBuf>) -> Result<SuggestConfig, CliError> {
    match locate_config(explicit) {
        Some(path) => {
            let config = load_config_file(&path)?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => {
            debug!("no config file, using defaults");
            Ok(SuggestConfig::default())
        }
    }
}

fn cmd_config_validate(explicit: Option<PathBuf>) -> Result<(), CliError> {
    match locate_config(explicit) {
        Some(path) => {
            load_config_file(&path)?;
            println!("config ok: {}", path.display());
        }
        None => {
            println!(
                "no config file at {}; built-in defaults apply",
                default_config_path().display()
            );
        }
    }
    Ok(())
}
