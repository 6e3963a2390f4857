use crate::model::SuggestedSet;
use crate::MAX_SUGGESTIONS;

/// Stable sort by kind priority then label, then keep the first
/// [`MAX_SUGGESTIONS`].
pub fn rank_and_cap(mut sets: Vec<SuggestedSet>) -> Vec<SuggestedSet> {
    sets.sort_by(|a, b| {
        a.kind
            .priority()
            .cmp(&b.kind.priority())
            .then_with(|| a.label.cmp(&b.label))
    });
    sets.truncate(MAX_SUGGESTIONS);
    sets
}
