use serde::Deserialize;

use crate::error::SuggestError;
use crate::tokens::{is_apostrophe, Tokenizer};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Engine settings. Every field is optional; an empty document is the
/// default configuration. Output caps and ranking are not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestConfig {
    #[serde(default)]
    pub stages: StageConfig,
    #[serde(default)]
    pub tokens: TokenConfig,
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Disabled stages are skipped; their contacts flow on to later stages.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    #[serde(default = "enabled")]
    pub work: bool,
    #[serde(default = "enabled")]
    pub family: bool,
    #[serde(default = "enabled")]
    pub clusters: bool,
    #[serde(default = "enabled")]
    pub catch_all: bool,
}

fn enabled() -> bool {
    true
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            work: true,
            family: true,
            clusters: true,
            catch_all: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// Appended to the built-in stoplist.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl SuggestConfig {
    pub fn from_toml(input: &str) -> Result<Self, SuggestError> {
        let config: SuggestConfig =
            toml::from_str(input).map_err(|e| SuggestError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SuggestError> {
        for word in &self.tokens.extra_stopwords {
            if word.is_empty() {
                return Err(SuggestError::ConfigValidation(
                    "extra_stopwords: empty stopword".into(),
                ));
            }
            if word.chars().any(char::is_uppercase) {
                return Err(SuggestError::ConfigValidation(format!(
                    "extra_stopwords: '{word}' must be lowercase"
                )));
            }
            if !word.chars().all(|c| c.is_alphanumeric() || is_apostrophe(c)) {
                return Err(SuggestError::ConfigValidation(format!(
                    "extra_stopwords: '{word}' must contain only letters, digits or apostrophes"
                )));
            }
            // Tokens are trimmed of edge apostrophes, so such a word never matches.
            if word.starts_with(is_apostrophe) || word.ends_with(is_apostrophe) {
                return Err(SuggestError::ConfigValidation(format!(
                    "extra_stopwords: '{word}' must not start or end with an apostrophe"
                )));
            }
        }
        Ok(())
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(&self.tokens.extra_stopwords)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
