//! `siddes suggest`: run the engine over a contact-match file.

use std::io::Read;
use std::path::{Path, PathBuf};

use siddes_suggest::{SuggestResult, SuggestedSet};
use tracing::debug;

use crate::config::resolve_config;
use crate::exit_codes::{EXIT_INPUT, EXIT_OUTPUT};
use crate::CliError;

const LABEL_WIDTH: usize = 32;

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::new(EXIT_INPUT, format!("cannot read stdin: {e}")))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::new(EXIT_INPUT, format!("cannot read {}: {e}", path.display())))
}

pub fn cmd_suggest(
    input_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = resolve_config(config_path)?;

    let raw = read_input(&input_path)?;
    let input = siddes_suggest::parse_matches_json(&raw).map_err(|e| {
        CliError::from(e).with_hint("expected {\"matches\": [...]} or a JSON array of matches")
    })?;
    debug!(matches = input.matches.len(), "loaded contact matches");

    let result = siddes_suggest::run(&config, &input);

    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str).map_err(|e| {
            CliError::new(EXIT_OUTPUT, format!("cannot write {}: {e}", path.display()))
        })?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    print_summary(&result);
    Ok(())
}

fn summary_line(s: &SuggestedSet) -> String {
    let side = s.side.to_string();
    format!(
        "  {side:<8} {label:<width$} {count:>2}  {reason}",
        label = s.label,
        width = LABEL_WIDTH,
        count = s.members.len(),
        reason = s.reason,
    )
}

/// Human summary to stderr.
fn print_summary(result: &SuggestResult) {
    let s = &result.summary;
    if s.total_suggestions == 0 {
        eprintln!(
            "no suggestions from {} contacts ({} unique)",
            result.meta.input_count, result.meta.unique_contacts
        );
        return;
    }

    eprintln!(
        "{} suggestions from {} unique contacts: {} grouped, {} ungrouped",
        s.total_suggestions,
        result.meta.unique_contacts,
        s.grouped_contacts,
        s.ungrouped_contacts,
    );
    for set in &result.suggestions {
        eprintln!("{}", summary_line(set));
    }
}
