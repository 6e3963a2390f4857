use std::collections::BTreeMap;

use tracing::debug;

use crate::catchall::extract_catch_all;
use crate::config::SuggestConfig;
use crate::family::extract_families;
use crate::model::{
    ContactMatch, SuggestInput, SuggestMeta, SuggestResult, SuggestSummary, SuggestedSet,
};
use crate::normalize::normalize_matches;
use crate::rank::rank_and_cap;
use crate::similarity::extract_clusters;
use crate::work::extract_work;
use crate::MIN_GROUP_SIZE;

/// Run the suggestion pipeline per config. Returns ranked suggestions + summary.
///
/// Never fails: unusable input produces an empty suggestion list.
pub fn run(config: &SuggestConfig, input: &SuggestInput) -> SuggestResult {
    let (suggestions, unique_contacts) = build(config, &input.matches);
    let summary = compute_summary(&suggestions, unique_contacts);

    SuggestResult {
        meta: SuggestMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            input_count: input.matches.len(),
            unique_contacts,
        },
        summary,
        suggestions,
    }
}

/// Suggestions for `matches` with every stage enabled.
pub fn suggest(matches: &[ContactMatch]) -> Vec<SuggestedSet> {
    build(&SuggestConfig::default(), matches).0
}

fn build(config: &SuggestConfig, matches: &[ContactMatch]) -> (Vec<SuggestedSet>, usize) {
    let contacts = normalize_matches(matches);
    let unique = contacts.len();
    if unique < MIN_GROUP_SIZE {
        debug!(input = matches.len(), unique, "too few contacts to group");
        return (Vec::new(), unique);
    }

    let stages = &config.stages;
    let mut used = vec![false; unique];
    let mut sets = Vec::new();

    if stages.work {
        sets.extend(extract_work(&contacts, &mut used));
    }
    if stages.family {
        sets.extend(extract_families(&contacts, &mut used));
    }
    let mut clustered = false;
    if stages.clusters {
        let clusters = extract_clusters(&contacts, &mut used, &config.tokenizer());
        clustered = !clusters.is_empty();
        sets.extend(clusters);
    }
    if stages.catch_all {
        sets.extend(extract_catch_all(&contacts, &mut used, clustered));
    }

    let ranked = rank_and_cap(sets);
    debug!(input = matches.len(), unique, suggestions = ranked.len(), "suggestions built");
    (ranked, unique)
}

pub fn compute_summary(suggestions: &[SuggestedSet], unique_contacts: usize) -> SuggestSummary {
    let mut kind_counts: BTreeMap<String, usize> = BTreeMap::new();
    for s in suggestions {
        *kind_counts.entry(s.kind.to_string()).or_insert(0) += 1;
    }
    let grouped: usize = suggestions.iter().map(|s| s.members.len()).sum();

    SuggestSummary {
        total_suggestions: suggestions.len(),
        grouped_contacts: grouped,
        ungrouped_contacts: unique_contacts.saturating_sub(grouped),
        kind_counts,
    }
}
