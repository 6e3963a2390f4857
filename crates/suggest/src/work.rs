use std::collections::HashMap;

use tracing::debug;

use crate::hash::stable_id;
use crate::model::{cap_members, SuggestedSet, SuggestionKind};
use crate::normalize::Contact;
use crate::tokens::title_case;
use crate::MIN_GROUP_SIZE;

/// `"acme.io"` -> `"Acme Team"`. Falls back to `"Work"` when the first DNS
/// label has no alphanumeric characters.
pub fn work_label(domain: &str) -> String {
    let brand: String = domain
        .split('.')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if brand.is_empty() {
        "Work".into()
    } else {
        format!("{} Team", title_case(&brand))
    }
}

/// Group workish contacts by domain. Every member of an emitted group is
/// marked used, including any beyond the member cap.
pub fn extract_work(contacts: &[Contact], used: &mut [bool]) -> Vec<SuggestedSet> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_domain: HashMap<&str, Vec<usize>> = HashMap::new();

    for (i, contact) in contacts.iter().enumerate() {
        if used[i] || !contact.workish {
            continue;
        }
        let Some(domain) = contact.domain.as_deref() else {
            continue;
        };
        by_domain
            .entry(domain)
            .or_insert_with(|| {
                order.push(domain);
                Vec::new()
            })
            .push(i);
    }

    let mut sets = Vec::new();
    for domain in order {
        let indices = &by_domain[domain];
        if indices.len() < MIN_GROUP_SIZE {
            continue;
        }
        for &i in indices {
            used[i] = true;
        }
        let members = cap_members(indices.iter().map(|&i| contacts[i].handle.clone()));
        sets.push(SuggestedSet::new(
            SuggestionKind::Work,
            stable_id("local_work", domain),
            work_label(domain),
            members,
            format!("{} contacts work at {domain}", indices.len()),
        ));
    }

    debug!(candidates = contacts.len(), emitted = sets.len(), "work stage");
    sets
}
