// Siddes CLI - contact set suggestions, headless

mod config;
mod exit_codes;
mod suggest;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exit_codes::{suggest_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "siddes")]
#[command(about = "Suggest Siddes sets from matched contacts (headless)")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Log engine stages to stderr (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest sets from a contact-match JSON file
    #[command(after_help = "\
Input is either {\"matches\": [...]} or a bare array of matches:
  {\"handle\": \"@maria\", \"display_name\": \"Maria Kamau\",
   \"hint\": {\"domain\": \"acme.io\", \"workish\": true}}

Examples:
  siddes suggest matches.json
  siddes suggest matches.json --json
  siddes suggest matches.json --output suggestions.json
  cat matches.json | siddes suggest - --json")]
    Suggest {
        /// Contact-match JSON file, or - for stdin
        input: PathBuf,

        /// Output JSON to stdout instead of only the human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Engine config (TOML). Defaults to $SIDDES_SUGGEST_CONFIG, then the user config dir
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Inspect and validate engine configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  siddes-suggest ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  siddes-suggest ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
        )
    }
}

/// Logs go to stderr so `--json` stdout stays a single JSON value.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("siddes=debug,siddes_suggest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => {
            eprintln!("Usage: siddes <command> [options]");
            eprintln!("       siddes --help for more information");
            Err(CliError::args(""))
        }
        Some(Commands::Suggest {
            input,
            json,
            output,
            config,
        }) => suggest::cmd_suggest(input, json, output, config),
        Some(Commands::Config { command }) => config::cmd_config(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<siddes_suggest::SuggestError> for CliError {
    fn from(err: siddes_suggest::SuggestError) -> Self {
        Self::new(suggest_exit_code(&err), err.to_string())
    }
}
