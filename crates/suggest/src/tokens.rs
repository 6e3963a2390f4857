//! Lexical tokens over display names and handles.

use std::collections::HashSet;

/// Tokens dropped before anything is counted: titles, legal suffixes,
/// filler words, pronouns.
const STOPWORDS: &[&str] = &[
    // titles
    "mrs", "miss", "prof", "sir", "madam", "rev", "hon", "capt",
    // legal suffixes + filler
    "inc", "llc", "ltd", "corp", "plc", "gmbh", "the", "and", "for", "with", "from", "official",
    "real", "app", "info", "admin", "contact", "hello", "support",
    // pronouns
    "she", "him", "her", "hers", "they", "them", "their", "theirs", "his", "you", "your",
    "yours", "our", "ours", "mine",
];

/// Generic business words. Counted, but never strong and never used for
/// pair signatures or labels.
const BLOCKLIST: &[&str] = &[
    "team", "group", "company", "office", "staff", "global", "labs", "studio", "studios",
    "media", "services", "solutions", "consulting", "agency", "digital", "systems", "tech",
    "works", "enterprises", "holdings", "partners", "ventures", "network", "store", "shop",
];

pub const MIN_TOKEN_CHARS: usize = 3;

pub fn is_blocklisted(token: &str) -> bool {
    BLOCKLIST.contains(&token)
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || is_apostrophe(c)
}

pub(crate) fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Splits text into filtered lowercase tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    extra_stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(extra_stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_stopwords: extra_stopwords
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn is_stopword(&self, token: &str) -> bool {
        STOPWORDS.contains(&token) || self.extra_stopwords.contains(token)
    }

    fn accept(&self, raw: &str) -> Option<String> {
        let token = raw.trim_matches(is_apostrophe);
        if token.chars().count() < MIN_TOKEN_CHARS {
            return None;
        }
        if token.chars().all(char::is_numeric) {
            return None;
        }
        if self.is_stopword(token) {
            return None;
        }
        Some(token.to_string())
    }

    /// Tokens of `text` in order of appearance, duplicates kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_token_char(c))
            .filter_map(|raw| self.accept(raw))
            .collect()
    }

    /// Distinct tokens of a contact's display name followed by its bare handle.
    pub fn contact_tokens(&self, display_name: &str, bare_handle: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokenize(display_name)
            .into_iter()
            .chain(self.tokenize(bare_handle))
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }
}

/// `"kAMAU"` -> `"Kamau"`.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_filters() {
        let t = Tokenizer::default();
        assert_eq!(
            t.tokenize("Dr. Amina O'Brien-Wanjiru 2024 (Acme Inc)"),
            vec!["amina", "o'brien", "wanjiru", "acme"]
        );
    }

    #[test]
    fn trims_apostrophes_and_drops_short() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("'joe' ab it’s"), vec!["joe", "it’s"]);
    }

    #[test]
    fn drops_numeric_and_pronouns() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("she/her 12345 runner99"), vec!["runner99"]);
    }

    #[test]
    fn extra_stopwords_apply() {
        let t = Tokenizer::new(["CrossFit"]);
        assert_eq!(t.tokenize("crossfit nairobi"), vec!["nairobi"]);
    }

    #[test]
    fn contact_tokens_are_distinct() {
        let t = Tokenizer::default();
        assert_eq!(
            t.contact_tokens("Kofi Boulder", "kofi.boulder"),
            vec!["kofi", "boulder"]
        );
    }

    #[test]
    fn blocklist_words_are_kept_by_tokenizer() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("studio team"), vec!["studio", "team"]);
        assert!(is_blocklisted("team"));
        assert!(!is_blocklisted("boulder"));
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("kAMAU"), "Kamau");
        assert_eq!(title_case("acme"), "Acme");
        assert_eq!(title_case(""), "");
    }
}
