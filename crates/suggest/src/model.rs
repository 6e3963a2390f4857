use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::MAX_MEMBERS;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Hints attached upstream by the contact-matching service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactHint {
    pub kind: Option<String>,
    pub domain: Option<String>,
    pub workish: bool,
}

/// A directory entry resolved from one of the user's contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMatch {
    pub handle: String,
    pub display_name: String,
    pub hint: Option<ContactHint>,
}

impl ContactMatch {
    pub fn new(handle: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            display_name: display_name.into(),
            hint: None,
        }
    }

    /// Attach a work-domain hint (`workish = true`).
    pub fn at_work(mut self, domain: impl Into<String>) -> Self {
        self.hint = Some(ContactHint {
            kind: None,
            domain: Some(domain.into()),
            workish: true,
        });
        self
    }
}

/// Pre-loaded contact matches, in the order the matching service returned them.
#[derive(Debug, Clone, Default)]
pub struct SuggestInput {
    pub matches: Vec<ContactMatch>,
}

// ---------------------------------------------------------------------------
// Sides + colors
// ---------------------------------------------------------------------------

/// Top-level audience scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideId {
    Public,
    Friends,
    Close,
    Work,
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Friends => write!(f, "friends"),
            Self::Close => write!(f, "close"),
            Self::Work => write!(f, "work"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Slate,
    Rose,
    Emerald,
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slate => write!(f, "slate"),
            Self::Rose => write!(f, "rose"),
            Self::Emerald => write!(f, "emerald"),
        }
    }
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// Which stage produced a suggestion. Also drives ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Work,
    Family,
    Cluster,
    Friends,
}

impl SuggestionKind {
    /// Rank order: work, family, token cluster, catch-all.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Work => 0,
            Self::Family => 1,
            Self::Cluster => 2,
            Self::Friends => 3,
        }
    }

    pub fn side(&self) -> SideId {
        match self {
            Self::Work => SideId::Work,
            Self::Family => SideId::Close,
            Self::Cluster | Self::Friends => SideId::Friends,
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            Self::Work => ColorTag::Slate,
            Self::Family => ColorTag::Rose,
            Self::Cluster | Self::Friends => ColorTag::Emerald,
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "work"),
            Self::Family => write!(f, "family"),
            Self::Cluster => write!(f, "cluster"),
            Self::Friends => write!(f, "friends"),
        }
    }
}

/// An engine-proposed grouping, pending user accept/skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedSet {
    pub id: String,
    pub kind: SuggestionKind,
    pub label: String,
    pub side: SideId,
    pub color: ColorTag,
    pub members: Vec<String>,
    pub reason: String,
}

impl SuggestedSet {
    /// Side and color follow from `kind`. `members` should already be capped.
    pub fn new(
        kind: SuggestionKind,
        id: String,
        label: String,
        members: Vec<String>,
        reason: String,
    ) -> Self {
        Self {
            id,
            kind,
            label,
            side: kind.side(),
            color: kind.color(),
            members,
            reason,
        }
    }
}

/// Dedupe handles preserving first occurrence, then cap to [`MAX_MEMBERS`].
pub fn cap_members<I>(handles: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    handles
        .into_iter()
        .filter(|h| seen.insert(h.clone()))
        .take(MAX_MEMBERS)
        .collect()
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SuggestSummary {
    pub total_suggestions: usize,
    pub grouped_contacts: usize,
    pub ungrouped_contacts: usize,
    pub kind_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestMeta {
    pub engine_version: String,
    pub input_count: usize,
    pub unique_contacts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestResult {
    pub meta: SuggestMeta,
    pub summary: SuggestSummary,
    pub suggestions: Vec<SuggestedSet>,
}
