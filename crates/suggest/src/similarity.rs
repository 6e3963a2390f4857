//! Token-similarity clustering.
//!
//! Contacts left over after the work and family stages are joined when they
//! share a discriminating token (held by a few people, not one and not many)
//! or the same pair of rarest tokens. Connected components of that union
//! become "Crew" suggestions.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::dsu::DisjointSet;
use crate::hash::stable_id;
use crate::model::{cap_members, SuggestedSet, SuggestionKind};
use crate::normalize::Contact;
use crate::tokens::{is_blocklisted, title_case, Tokenizer, MIN_TOKEN_CHARS};
use crate::MIN_GROUP_SIZE;

/// Below this many leftover contacts the stage is skipped.
pub const MIN_POOL: usize = 4;

/// Frequency band of a strong token.
const STRONG_FREQUENCY: RangeInclusive<usize> = 1..=3;
const STRONG_MIN_CHARS: usize = 4;

/// Contacts sharing a rare-pair signature are joined only in groups this size.
const PAIR_GROUP_SIZE: RangeInclusive<usize> = 2..=5;

const MAX_CLUSTERS: usize = 3;
const MEGA_CLUSTER_FLOOR: usize = 8;

/// Token -> number of pool contacts holding it.
type Frequencies<'a> = BTreeMap<&'a str, usize>;

fn char_len(token: &str) -> usize {
    token.chars().count()
}

pub fn is_strong(token: &str, frequency: usize) -> bool {
    !is_blocklisted(token)
        && STRONG_FREQUENCY.contains(&frequency)
        && char_len(token) >= STRONG_MIN_CHARS
}

/// Components at or above this size are treated as noise.
pub fn mega_cluster_limit(pool: usize) -> usize {
    MEGA_CLUSTER_FLOOR.max(pool * 7 / 10)
}

/// The two rarest non-blocklisted tokens, ordered lexicographically.
fn rare_pair<'a>(tokens: &'a [String], freq: &Frequencies<'a>) -> Option<(&'a str, &'a str)> {
    let mut candidates: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !is_blocklisted(t))
        .collect();
    if candidates.len() < 2 {
        return None;
    }
    candidates.sort_by(|a, b| {
        freq[a]
            .cmp(&freq[b])
            .then_with(|| char_len(b).cmp(&char_len(a)))
            .then_with(|| a.cmp(b))
    });
    let (a, b) = (candidates[0], candidates[1]);
    Some(if a <= b { (a, b) } else { (b, a) })
}

/// Score of a token inside one component: `held / frequency`, i.e. the sum
/// of `1 / frequency` over the members holding it. Kept as a fraction so
/// ties compare exactly.
#[derive(Debug, Clone, Copy)]
struct TokenScore {
    held: usize,
    frequency: usize,
}

impl TokenScore {
    fn cmp_value(&self, other: &Self) -> Ordering {
        (self.held * other.frequency).cmp(&(other.held * self.frequency))
    }
}

/// Highest-scoring token of a component. Ties prefer more holders, then
/// longer tokens, then the lexicographically smaller one.
fn best_cluster_token<'a>(
    component: &[usize],
    token_sets: &'a [Vec<String>],
    freq: &Frequencies<'a>,
) -> Option<&'a str> {
    let mut scores: BTreeMap<&'a str, TokenScore> = BTreeMap::new();
    for &local in component {
        for token in &token_sets[local] {
            if is_blocklisted(token) || char_len(token) < MIN_TOKEN_CHARS {
                continue;
            }
            scores
                .entry(token.as_str())
                .or_insert(TokenScore {
                    held: 0,
                    frequency: freq[token.as_str()],
                })
                .held += 1;
        }
    }

    scores
        .into_iter()
        .max_by(|(ta, sa), (tb, sb)| {
            sa.cmp_value(sb)
                .then_with(|| sa.held.cmp(&sb.held))
                .then_with(|| char_len(ta).cmp(&char_len(tb)))
                .then_with(|| tb.cmp(ta))
        })
        .map(|(token, _)| token)
}

/// Run the clustering stage over every contact not yet `used`.
pub fn extract_clusters(
    contacts: &[Contact],
    used: &mut [bool],
    tokenizer: &Tokenizer,
) -> Vec<SuggestedSet> {
    let pool: Vec<usize> = (0..contacts.len()).filter(|&i| !used[i]).collect();
    if pool.len() < MIN_POOL {
        debug!(pool = pool.len(), "cluster stage skipped: pool too small");
        return Vec::new();
    }

    let token_sets: Vec<Vec<String>> = pool
        .iter()
        .map(|&i| tokenizer.contact_tokens(&contacts[i].display_name, contacts[i].bare_handle()))
        .collect();

    let mut holders: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (local, tokens) in token_sets.iter().enumerate() {
        for token in tokens {
            holders.entry(token.as_str()).or_default().push(local);
        }
    }
    let freq: Frequencies<'_> = holders.iter().map(|(t, h)| (*t, h.len())).collect();

    let mut dsu = DisjointSet::new(pool.len());

    for (token, members) in &holders {
        if is_strong(token, members.len()) {
            trace!(token, holders = members.len(), "union on strong token");
            dsu.union_all(members);
        }
    }

    let mut by_pair: BTreeMap<(&str, &str), Vec<usize>> = BTreeMap::new();
    for (local, tokens) in token_sets.iter().enumerate() {
        if let Some(pair) = rare_pair(tokens, &freq) {
            by_pair.entry(pair).or_default().push(local);
        }
    }
    for (pair, members) in &by_pair {
        if PAIR_GROUP_SIZE.contains(&members.len()) {
            trace!(?pair, holders = members.len(), "union on rare pair");
            dsu.union_all(members);
        }
    }

    let mut components: Vec<Vec<usize>> = dsu
        .components()
        .into_iter()
        .filter(|c| c.len() >= MIN_GROUP_SIZE)
        .collect();
    // Stable: equal sizes keep first-member order.
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components.truncate(MAX_CLUSTERS);

    let limit = mega_cluster_limit(pool.len());
    let mut sets: Vec<SuggestedSet> = Vec::new();

    for component in components {
        if component.len() >= limit {
            debug!(size = component.len(), limit, "rejecting over-broad cluster");
            continue;
        }

        let token = best_cluster_token(&component, &token_sets, &freq);
        let label = match token {
            Some(t) => format!("{} Crew", title_case(t)),
            None => format!("Friends Group {}", sets.len() + 1),
        };

        for &local in &component {
            used[pool[local]] = true;
        }
        let members = cap_members(component.iter().map(|&l| contacts[pool[l]].handle.clone()));

        let mut sorted = members.clone();
        sorted.sort();
        let key = format!("{}:{}", token.unwrap_or("friends"), sorted.join(","));

        let reason = match token {
            Some(t) => format!("{} contacts share \"{t}\" in their names or handles", component.len()),
            None => format!("{} contacts with overlapping names and handles", component.len()),
        };

        sets.push(SuggestedSet::new(
            SuggestionKind::Cluster,
            stable_id("local_cluster", &key),
            label,
            members,
            reason,
        ));
    }

    debug!(pool = pool.len(), emitted = sets.len(), "cluster stage");
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactMatch, SideId};
    use crate::normalize::normalize_matches;

    fn run(matches: &[ContactMatch]) -> (Vec<SuggestedSet>, Vec<bool>) {
        let contacts = normalize_matches(matches);
        let mut used = vec![false; contacts.len()];
        let sets = extract_clusters(&contacts, &mut used, &Tokenizer::default());
        (sets, used)
    }

    #[test]
    fn strong_token_rules() {
        assert!(is_strong("boulder", 2));
        assert!(is_strong("kofi", 1));
        assert!(!is_strong("kofi", 4));
        assert!(!is_strong("ava", 2));
        assert!(!is_strong("studio", 2));
    }

    #[test]
    fn mega_limit() {
        assert_eq!(mega_cluster_limit(4), 8);
        assert_eq!(mega_cluster_limit(10), 8);
        assert_eq!(mega_cluster_limit(20), 14);
    }

    #[test]
    fn skipped_below_min_pool() {
        let (sets, used) = run(&[
            ContactMatch::new("@kofi.boulder", "Kofi"),
            ContactMatch::new("@boulder_nina", "Nina"),
            ContactMatch::new("@pete", "Pete"),
        ]);
        assert!(sets.is_empty());
        assert!(used.iter().all(|u| !u));
    }

    #[test]
    fn shared_strong_token_forms_crew() {
        let (sets, used) = run(&[
            ContactMatch::new("@kofi.boulder", "Kofi A"),
            ContactMatch::new("@boulder_nina", "Nina B"),
            ContactMatch::new("@boulderpete", "Pete C"),
            ContactMatch::new("@sam", "Sam D"),
            ContactMatch::new("@lulu", "Lulu E"),
        ]);
        assert_eq!(sets.len(), 1);
        let crew = &sets[0];
        assert_eq!(crew.label, "Boulder Crew");
        assert_eq!(crew.side, SideId::Friends);
        assert_eq!(crew.members, vec!["@kofi.boulder", "@boulder_nina"]);
        assert_eq!(
            crew.id,
            stable_id("local_cluster", "boulder:@boulder_nina,@kofi.boulder")
        );
        assert_eq!(used, vec![true, true, false, false, false]);
    }

    #[test]
    fn rare_pair_joins_short_tokens() {
        let (sets, _) = run(&[
            ContactMatch::new("@ava.kim", "Ava"),
            ContactMatch::new("@kim_ava", "Kim"),
            ContactMatch::new("@lulu", "Lulu"),
            ContactMatch::new("@zora", "Zora"),
        ]);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].label, "Ava Crew");
        assert_eq!(sets[0].members, vec!["@ava.kim", "@kim_ava"]);
    }

    #[test]
    fn chained_mega_cluster_is_rejected() {
        let words = [
            "amber", "birch", "cedar", "daisy", "ember", "flint", "grove", "hazel", "ivory",
            "jasper", "koala",
        ];
        let matches: Vec<ContactMatch> = words
            .windows(2)
            .map(|w| ContactMatch::new(format!("@{}_{}", w[0], w[1]), "Xq"))
            .collect();
        assert_eq!(matches.len(), 10);

        let (sets, used) = run(&matches);
        assert!(sets.is_empty());
        assert!(used.iter().all(|u| !u));
    }

    #[test]
    fn only_three_largest_components_are_kept() {
        let matches: Vec<ContactMatch> = ["amber", "birch", "cedar", "daisy", "ember"]
            .iter()
            .flat_map(|w| {
                [
                    ContactMatch::new(format!("@{w}_x1"), ""),
                    ContactMatch::new(format!("@{w}_y2"), ""),
                ]
            })
            .collect();

        let (sets, used) = run(&matches);
        let labels: Vec<&str> = sets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Amber Crew", "Birch Crew", "Cedar Crew"]);
        assert_eq!(&used[..6], &[true; 6]);
        assert_eq!(&used[6..], &[false; 4]);
    }

    #[test]
    fn rare_pair_groups_above_five_are_not_joined() {
        let group = |n: usize| -> Vec<ContactMatch> {
            (1..=n)
                .map(|i| ContactMatch::new(format!("@ava_kim_{i}"), ""))
                .collect()
        };

        let (sets, used) = run(&group(6));
        assert!(sets.is_empty());
        assert!(used.iter().all(|u| !u));

        let (sets, used) = run(&group(5));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].label, "Ava Crew");
        assert_eq!(sets[0].members.len(), 5);
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn best_token_prefers_shared_tokens() {
        let token_sets = vec![
            vec!["kofi".to_string(), "boulder".to_string()],
            vec!["nina".to_string(), "boulder".to_string()],
        ];
        let freq: Frequencies<'_> = [("kofi", 1), ("nina", 1), ("boulder", 2)].into_iter().collect();
        assert_eq!(best_cluster_token(&[0, 1], &token_sets, &freq), Some("boulder"));
    }

    #[test]
    fn best_token_skips_blocklist() {
        let token_sets = vec![vec!["studio".to_string()], vec!["studio".to_string()]];
        let freq: Frequencies<'_> = [("studio", 2)].into_iter().collect();
        assert_eq!(best_cluster_token(&[0, 1], &token_sets, &freq), None);
    }
}
