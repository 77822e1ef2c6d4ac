//! # ZoomMap Suggest
//!
//! Link suggestions for swap pin frames.
//!
//! ```text
//! DocumentCorpus ──build──▶ SuggestionIndex ──matches(query)──▶ ≤ 20 candidates
//!                                  │
//!                                  └──▶ SuggestionPopup (visibility + selection)
//! ```
//!
//! The index is built once when an editor opens and stays read-only for the
//! rest of the session. Matching is a pure substring filter in index order.

mod candidate;
mod index;
mod matcher;
mod popup;

pub use candidate::SuggestionCandidate;
pub use index::SuggestionIndex;
pub use matcher::{match_candidates, MAX_SUGGESTIONS};
pub use popup::{SuggestionPopup, DEFAULT_HIDE_DELAY};
