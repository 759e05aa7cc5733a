//! Item search for Peyda.
//!
//! Turns a free-text message into a ranked list of item suggestions: keyword
//! extraction, desired-type guessing, a bounded candidate fetch through the
//! [`store::ItemStore`] boundary, and in-memory substring scoring. The store
//! is the only fallible, potentially suspending piece; everything else is
//! pure computation.

pub mod memory;
pub mod query;
pub mod ranker;
pub mod searcher;
pub mod snippet;
pub mod store;

pub use memory::MemoryItemStore;
pub use query::{DEFAULT_MAX_RESULTS, guess_desired_type};
pub use searcher::{ItemSearcher, SearchOutcome, Suggestion};
pub use snippet::{SNIPPET_MAX_CHARS, make_snippet};
pub use store::{CandidateFilter, ItemCandidate, ItemStore, ItemType, TagRecord};
