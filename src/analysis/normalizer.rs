//! Text normalization for mixed Latin/Persian input.
//!
//! Chat messages arrive with arbitrary casing, Latin and Persian punctuation,
//! and the invisible control characters Persian keyboards produce (zero-width
//! non-joiner, direction marks). [`normalize`] folds all of that away so the
//! rest of the pipeline only ever sees lowercase space-separated words.
//!
//! # Examples
//!
//! ```
//! use peyda::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("  Hello, World!! "), "hello world");
//! assert_eq!(normalize("کیف، گم شد؟"), "کیف گم شد");
//! ```

/// Check whether a character belongs to the punctuation class that is
/// replaced by a space during normalization.
///
/// Covers ASCII punctuation, the Persian/Arabic comma, semicolon and question
/// mark, the zero-width non-joiner, the right-to-left mark, and the
/// directional embedding/override controls.
fn is_strippable(c: char) -> bool {
    matches!(
        c,
        '!'..='/'
            | ':'..='@'
            | '['..='`'
            | '{'..='~'
            | '\u{060C}' // arabic comma
            | '\u{061B}' // arabic semicolon
            | '\u{061F}' // arabic question mark
            | '\u{200C}' // zero-width non-joiner
            | '\u{200F}' // right-to-left mark
            | '\u{202A}'..='\u{202E}' // directional embeddings and overrides
    )
}

/// Normalize a chat message for matching.
///
/// Lowercases the input, replaces every strippable punctuation character with
/// a space, collapses whitespace runs to a single space, and trims. The
/// result may be empty; the function never fails.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for any `s`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let replaced: String = lowered
        .chars()
        .map(|c| if is_strippable(c) { ' ' } else { c })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
