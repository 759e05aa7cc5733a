//! Intent definitions and classification for Peyda.
//!
//! An intent is a named conversational purpose with a handful of example
//! utterances and a canned reply. The corpus of intents is built once at
//! startup (pre-tokenizing every example) and shared read-only across
//! requests; classification itself is a stateless per-message decision.

pub mod classifier;
pub mod corpus;
pub mod hints;

pub use classifier::IntentClassifier;
pub use corpus::{FALLBACK_INTENT, Intent, IntentCorpus, SEARCH_INTENT, default_intents};
