use std::collections::HashSet;

use crate::model::ContactMatch;

/// A contact after handle normalization and dedupe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Lowercase, `@`-prefixed.
    pub handle: String,
    pub display_name: String,
    pub domain: Option<String>,
    pub workish: bool,
}

impl Contact {
    /// Handle without its `@` prefix.
    pub fn bare_handle(&self) -> &str {
        self.handle.trim_start_matches('@')
    }
}

/// `" @@Maria_K "` -> `"@maria_k"`. Empty after trimming -> `None`.
pub fn normalize_handle(raw: &str) -> Option<String> {
    let bare = raw.trim().trim_start_matches('@').trim();
    if bare.is_empty() {
        return None;
    }
    Some(format!("@{}", bare.to_lowercase()))
}

/// `" @Acme.IO. "` -> `"acme.io"`. Empty -> `None`.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw
        .trim()
        .trim_start_matches('@')
        .trim_end_matches('.')
        .to_lowercase();
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Normalize every match and keep the first occurrence of each handle.
pub fn normalize_matches(matches: &[ContactMatch]) -> Vec<Contact> {
    let mut seen = HashSet::new();
    let mut contacts = Vec::with_capacity(matches.len());

    for m in matches {
        let Some(handle) = normalize_handle(&m.handle) else {
            continue;
        };
        if !seen.insert(handle.clone()) {
            continue;
        }

        let (domain, workish) = match &m.hint {
            Some(hint) => (
                hint.domain.as_deref().and_then(normalize_domain),
                hint.workish,
            ),
            None => (None, false),
        };

        contacts.push(Contact {
            handle,
            display_name: m.display_name.trim().to_string(),
            domain,
            workish,
        });
    }

    contacts
}
