use tracing::debug;

use crate::hash::stable_id;
use crate::model::{cap_members, SuggestedSet, SuggestionKind};
use crate::normalize::Contact;
use crate::MIN_GROUP_SIZE;

/// How many members feed the catch-all id.
const ID_MEMBERS: usize = 8;

pub const PRIMARY_LABEL: &str = "Friends from your contacts";
pub const SECONDARY_LABEL: &str = "More friends from your contacts";

/// Everyone not placed by an earlier stage, as one friends suggestion.
///
/// The id is keyed on the first eight members in sorted order, so the same
/// leftover set gets the same id whatever order the input arrived in.
pub fn extract_catch_all(
    contacts: &[Contact],
    used: &mut [bool],
    after_clusters: bool,
) -> Option<SuggestedSet> {
    let remaining: Vec<usize> = (0..contacts.len()).filter(|&i| !used[i]).collect();
    if remaining.len() < MIN_GROUP_SIZE {
        debug!(remaining = remaining.len(), "catch-all stage: nothing to collect");
        return None;
    }

    for &i in &remaining {
        used[i] = true;
    }
    let members = cap_members(remaining.iter().map(|&i| contacts[i].handle.clone()));

    let mut sorted = members.clone();
    sorted.sort();
    sorted.truncate(ID_MEMBERS);

    let label = if after_clusters {
        SECONDARY_LABEL
    } else {
        PRIMARY_LABEL
    };

    debug!(remaining = remaining.len(), "catch-all stage");
    Some(SuggestedSet::new(
        SuggestionKind::Friends,
        stable_id("local_friends", &sorted.join(",")),
        label.into(),
        members,
        format!("{} contacts on Siddes not placed in another group", remaining.len()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactMatch, SideId};
    use crate::normalize::normalize_matches;

    fn contacts(handles: &[&str]) -> Vec<Contact> {
        let matches: Vec<ContactMatch> =
            handles.iter().map(|h| ContactMatch::new(*h, "Someone")).collect();
        normalize_matches(&matches)
    }

    #[test]
    fn collects_unused_in_input_order() {
        let c = contacts(&["@zed", "@plix", "@abc"]);
        let mut used = vec![false, true, false];
        let set = extract_catch_all(&c, &mut used, false).unwrap();
        assert_eq!(set.label, PRIMARY_LABEL);
        assert_eq!(set.side, SideId::Friends);
        assert_eq!(set.members, vec!["@zed", "@abc"]);
        assert_eq!(used, vec![true, true, true]);
    }

    #[test]
    fn secondary_label_after_clusters() {
        let c = contacts(&["@zed", "@plix"]);
        let mut used = vec![false; 2];
        let set = extract_catch_all(&c, &mut used, true).unwrap();
        assert_eq!(set.label, SECONDARY_LABEL);
    }

    #[test]
    fn single_leftover_is_dropped() {
        let c = contacts(&["@zed", "@plix"]);
        let mut used = vec![true, false];
        assert!(extract_catch_all(&c, &mut used, false).is_none());
        assert_eq!(used, vec![true, false]);
    }

    #[test]
    fn id_ignores_input_order() {
        let forward = contacts(&["@zed", "@plix", "@abc"]);
        let backward = contacts(&["@abc", "@plix", "@zed"]);
        let a = extract_catch_all(&forward, &mut vec![false; 3], false).unwrap();
        let b = extract_catch_all(&backward, &mut vec![false; 3], false).unwrap();
        assert_eq!(a.id, b.id);
        assert_ne!(a.members, b.members);
    }
}
