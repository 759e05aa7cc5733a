//! Bilingual stop-word lists.
//!
//! Common English and Persian words that carry no search signal are filtered
//! out during keyword extraction. The lists live here as plain data so they
//! can be extended without touching any control flow.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words filtered during keyword extraction.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "can", "cant", "could", "did", "do",
    "does", "doing", "for", "from", "had", "has", "have", "having", "how", "i", "im", "in", "into",
    "is", "it", "its", "me", "my", "of", "on", "or", "our", "ours", "please", "pls", "the",
    "their", "them", "then", "there", "they", "this", "to", "was", "we", "were", "what", "where",
    "when", "who", "why", "with", "you", "your", "yours",
];

/// Persian stop words filtered during keyword extraction.
pub const PERSIAN_STOP_WORDS: &[&str] = &[
    "و",
    "یا",
    "اما",
    "که",
    "این",
    "اون",
    "آن",
    "هم",
    "همه",
    "یک",
    "یه",
    "را",
    "رو",
    "به",
    "در",
    "از",
    "برای",
    "با",
    "من",
    "تو",
    "شما",
    "ما",
    "او",
    "ایشان",
    "هست",
    "هستم",
    "هستی",
    "هستید",
    "هستیم",
    "بود",
    "بودم",
    "بودیم",
    "کردم",
    "کرد",
    "کردی",
    "کردید",
    "کردیم",
    "می",
    "میشه",
    "میتونم",
    "میتونید",
    "چطور",
    "چگونه",
    "کجا",
    "چی",
    "لطفا",
    "لطفاً",
    "خواهش",
    "خواهشاً",
];

/// English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Persian stop words as a HashSet.
pub static PERSIAN_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PERSIAN_STOP_WORDS.iter().copied().collect());

/// Check whether a normalized token is a stop word in either language.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_STOP_WORDS_SET.contains(token) || PERSIAN_STOP_WORDS_SET.contains(token)
}
