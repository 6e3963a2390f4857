//! CLI Exit Code Registry
//!
//! Single source of truth for `siddes` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                       |
//! |------|-----------------------------------------------|
//! | 0    | Success (including "no suggestions")          |
//! | 1    | General error (unspecified)                   |
//! | 2    | Usage error (bad args)                        |
//! | 3    | Contact-match input unreadable or not JSON    |
//! | 4    | Config unreadable or invalid                  |
//! | 5    | Output file could not be written              |

use siddes_suggest::SuggestError;

/// Success. An empty suggestion list is still a success.
pub const EXIT_SUCCESS: u8 = 0;

/// General error. Prefer a specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments.
pub const EXIT_USAGE: u8 = 2;

/// Input file missing, unreadable, or not valid JSON.
pub const EXIT_INPUT: u8 = 3;

/// Config file unreadable, not valid TOML, or failed validation.
pub const EXIT_CONFIG: u8 = 4;

/// `--output` path could not be written.
pub const EXIT_OUTPUT: u8 = 5;

pub fn suggest_exit_code(err: &SuggestError) -> u8 {
    match err {
        SuggestError::InputParse(_) => EXIT_INPUT,
        SuggestError::ConfigParse(_) | SuggestError::ConfigValidation(_) => EXIT_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [EXIT_SUCCESS, EXIT_ERROR, EXIT_USAGE, EXIT_INPUT, EXIT_CONFIG, EXIT_OUTPUT];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn engine_errors_map_to_domain_codes() {
        assert_eq!(suggest_exit_code(&SuggestError::InputParse("x".into())), EXIT_INPUT);
        assert_eq!(suggest_exit_code(&SuggestError::ConfigParse("x".into())), EXIT_CONFIG);
        assert_eq!(
            suggest_exit_code(&SuggestError::ConfigValidation("x".into())),
            EXIT_CONFIG
        );
    }
}
