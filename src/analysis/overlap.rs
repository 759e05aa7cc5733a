//! Token overlap (Jaccard) scoring.
//!
//! Used by the intent classifier to compare a message against pre-tokenized
//! example utterances. Item ranking does NOT use this scorer; it relies on
//! substring containment instead (see [`crate::search::ranker`]).

use std::collections::HashSet;

/// Jaccard similarity between two token sequences, treated as sets.
///
/// Returns a value in `[0.0, 1.0]`; `0.0` when either sequence is empty,
/// `1.0` when both contain exactly the same tokens.
pub fn token_overlap_score(a_tokens: &[String], b_tokens: &[String]) -> f64 {
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let a: HashSet<&str> = a_tokens.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b_tokens.iter().map(String::as_str).collect();

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
