//! Whitespace tokenizer over normalized text.
//!
//! Tokenization in Peyda is deliberately simple: normalize first, then split
//! on the single-space delimiter the normalizer guarantees. There is no
//! morphological analysis and no stemming; both English and Persian are
//! space-separated, which is all the downstream matching needs.
//!
//! # Examples
//!
//! ```
//! use peyda::analysis::tokenizer::tokenize;
//!
//! assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
//! assert!(tokenize("   ").is_empty());
//! ```

use crate::analysis::normalizer::normalize;

/// Split a message into normalized word tokens.
///
/// Returns an empty vector for empty or whitespace-only input. Pure and
/// deterministic; tokens never contain empty strings.
pub fn tokenize(text: &str) -> Vec<String> {
    let norm = normalize(text);
    if norm.is_empty() {
        return Vec::new();
    }

    norm.split(' ')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
