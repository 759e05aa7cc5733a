//! Keyword extraction from free-form chat messages.
//!
//! A keyword is a token that survives stop-word, numeric, length, and
//! duplicate filtering. Keywords keep their first-occurrence order — the user
//! usually leads with the most important words ("wallet lost library") — and
//! the result is capped so a rambling message cannot blow up the search fan-out.
//!
//! # Examples
//!
//! ```
//! use peyda::analysis::keywords::extract_keywords;
//!
//! let kws = extract_keywords("I lost my black wallet near the library", 8);
//! assert_eq!(kws, vec!["lost", "black", "wallet", "near", "library"]);
//! ```

use std::collections::HashSet;

use crate::analysis::stop_words::is_stop_word;
use crate::analysis::tokenizer::tokenize;

/// Default cap on the number of extracted keywords.
pub const DEFAULT_MAX_KEYWORDS: usize = 6;

/// Extract up to `max_keywords` search keywords from a message.
///
/// Tokens are kept in first-occurrence order. A token is dropped if it is
/// shorter than two characters, a stop word in either language, purely
/// numeric, or a duplicate of an already kept keyword. Extraction stops as
/// soon as the cap is reached.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let tokens = tokenize(text);

    let mut out = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in &tokens {
        if token.chars().count() < 2 {
            continue;
        }
        if is_stop_word(token) {
            continue;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if !seen.insert(token.as_str()) {
            continue;
        }
        out.push(token.clone());
        if out.len() >= max_keywords {
            break;
        }
    }

    out
}
