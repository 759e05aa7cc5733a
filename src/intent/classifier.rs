//! Per-message intent decision procedure.
//!
//! Classification is a fixed-order cascade: feature/help hints first, then
//! lost/found hints and item nouns, then a keyword-count heuristic, and only
//! if none of those mark the message as an item search does the corpus
//! overlap scoring run. The cascade order matters — a help question that
//! mentions a wallet must still route to the FAQ side.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use peyda::intent::{IntentClassifier, IntentCorpus, SEARCH_INTENT};
//!
//! let classifier = IntentClassifier::new(Arc::new(IntentCorpus::default()));
//! assert_eq!(classifier.classify("I lost my wallet yesterday"), SEARCH_INTENT);
//! assert_eq!(classifier.classify("سلام"), "greeting");
//! ```

use std::sync::Arc;

use crate::analysis::{extract_keywords, normalize, token_overlap_score, tokenize};
use crate::intent::corpus::{FALLBACK_INTENT, IntentCorpus, SEARCH_INTENT};
use crate::intent::hints::{FEATURE_HINTS, ITEM_WORDS, LOST_FOUND_HINTS, contains_any};

/// Minimum overlap score for a corpus match; below this the fallback intent
/// is returned.
pub const MIN_OVERLAP_SCORE: f64 = 0.2;

/// Messages shorter than this (after normalization) are never item searches.
pub const MIN_SEARCH_CHARS: usize = 6;

/// Keyword cap used by the search heuristic.
pub const SEARCH_KEYWORD_CAP: usize = 8;

/// Minimum surviving keywords for the fallback search heuristic to fire.
pub const SEARCH_KEYWORD_THRESHOLD: usize = 3;

/// Stateless per-message intent classifier over a shared read-only corpus.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    corpus: Arc<IntentCorpus>,
}

impl IntentClassifier {
    /// Create a classifier over the given corpus.
    pub fn new(corpus: Arc<IntentCorpus>) -> Self {
        IntentClassifier { corpus }
    }

    /// The corpus this classifier scores against.
    pub fn corpus(&self) -> &Arc<IntentCorpus> {
        &self.corpus
    }

    /// Decide whether the message is asking to search for an item.
    ///
    /// Feature/help hints veto a search even when item words are present.
    pub fn wants_item_search(&self, message: &str) -> bool {
        let m = normalize(message);
        if m.chars().count() < MIN_SEARCH_CHARS {
            return false;
        }

        if contains_any(&m, FEATURE_HINTS) {
            return false;
        }
        if contains_any(&m, LOST_FOUND_HINTS) {
            return true;
        }
        if contains_any(&m, ITEM_WORDS) {
            return true;
        }

        // fallback heuristic: enough content words look like a description
        extract_keywords(message, SEARCH_KEYWORD_CAP).len() >= SEARCH_KEYWORD_THRESHOLD
    }

    /// Classify a message, returning the intent name.
    ///
    /// Search detection runs first; otherwise the message is scored against
    /// every pre-tokenized example and the best intent wins if its score
    /// reaches [`MIN_OVERLAP_SCORE`]. Ties resolve to the first-registered
    /// intent because only a strictly better score replaces the current best.
    pub fn classify(&self, message: &str) -> &str {
        if self.wants_item_search(message) {
            return SEARCH_INTENT;
        }

        let msg_tokens = tokenize(message);
        if msg_tokens.is_empty() {
            return FALLBACK_INTENT;
        }

        let mut best_intent = FALLBACK_INTENT;
        let mut best_score = 0.0;

        for example in self.corpus.trained() {
            let score = token_overlap_score(&msg_tokens, &example.tokens);
            if score > best_score {
                best_score = score;
                best_intent = &example.intent;
            }
        }

        if best_score >= MIN_OVERLAP_SCORE {
            best_intent
        } else {
            FALLBACK_INTENT
        }
    }
}
