//! Fuzzy matching for command names.
//!
//! Scores candidates by substring containment and Levenshtein distance so the
//! command loop can suggest the nearest known command after a typo.

pub mod command_matcher;

pub use command_matcher::{CommandMatcher, MIN_SUGGESTION_SCORE};
