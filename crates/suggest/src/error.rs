use std::fmt;

#[derive(Debug)]
pub enum SuggestError {
    /// Contact-match JSON is not syntactically valid.
    InputParse(String),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (bad stopword, etc.).
    ConfigValidation(String),
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputParse(msg) => write!(f, "input parse error: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for SuggestError {}
