use std::collections::HashMap;

use tracing::debug;

use crate::hash::stable_id;
use crate::model::{cap_members, SuggestedSet, SuggestionKind};
use crate::normalize::Contact;
use crate::tokens::title_case;
use crate::MIN_GROUP_SIZE;

const MIN_SURNAME_CHARS: usize = 3;

/// Last name token, lowercased, when the name has at least two tokens and the
/// last one is alphabetic with at least three characters.
pub fn surname_of(display_name: &str) -> Option<String> {
    let parts: Vec<&str> = display_name.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let last = parts[parts.len() - 1];
    if last.chars().count() < MIN_SURNAME_CHARS || !last.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(last.to_lowercase())
}

pub fn extract_families(contacts: &[Contact], used: &mut [bool]) -> Vec<SuggestedSet> {
    let mut order: Vec<String> = Vec::new();
    let mut by_surname: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, contact) in contacts.iter().enumerate() {
        if used[i] {
            continue;
        }
        let Some(surname) = surname_of(&contact.display_name) else {
            continue;
        };
        by_surname
            .entry(surname.clone())
            .or_insert_with(|| {
                order.push(surname);
                Vec::new()
            })
            .push(i);
    }

    let mut sets = Vec::new();
    for surname in &order {
        let remaining: Vec<usize> = by_surname[surname]
            .iter()
            .copied()
            .filter(|&i| !used[i])
            .collect();
        if remaining.len() < MIN_GROUP_SIZE {
            continue;
        }
        for &i in &remaining {
            used[i] = true;
        }
        let display = title_case(surname);
        let members = cap_members(remaining.iter().map(|&i| contacts[i].handle.clone()));
        sets.push(SuggestedSet::new(
            SuggestionKind::Family,
            stable_id("local_family", surname),
            format!("{display} Family"),
            members,
            format!("{} contacts share the surname {display}", remaining.len()),
        ));
    }

    debug!(surnames = order.len(), emitted = sets.len(), "family stage");
    sets
}
