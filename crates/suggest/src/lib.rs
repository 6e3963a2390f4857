//! `siddes-suggest`: on-device contact clustering for set suggestions.
//!
//! Pure engine crate: receives contact matches, returns ranked suggested sets.
//! No CLI or IO dependencies.

pub mod catchall;
pub mod config;
pub mod dsu;
pub mod engine;
pub mod error;
pub mod family;
pub mod hash;
pub mod load;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod similarity;
pub mod tokens;
pub mod work;

pub use config::SuggestConfig;
pub use engine::{run, suggest};
pub use error::SuggestError;
pub use load::parse_matches_json;
pub use model::{
    ColorTag, ContactHint, ContactMatch, SideId, SuggestInput, SuggestResult, SuggestedSet,
    SuggestionKind,
};

/// Maximum number of suggestions returned by a single run.
pub const MAX_SUGGESTIONS: usize = 8;

/// Maximum number of members listed on a single suggestion.
pub const MAX_MEMBERS: usize = 24;

/// Grouping needs at least this many unique contacts (and members per group).
pub const MIN_GROUP_SIZE: usize = 2;
