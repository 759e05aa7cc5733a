//! Text analysis module for Peyda.
//!
//! This module provides the dependency-free text pipeline the chatbot is built
//! on: Unicode-aware normalization, whitespace tokenization, bilingual
//! (English/Persian) stop-word filtering, keyword extraction, and token
//! overlap scoring. Everything here is a pure function over `&str`; nothing
//! allocates global state except the lazily built stop-word sets.

pub mod keywords;
pub mod normalizer;
pub mod overlap;
pub mod stop_words;
pub mod tokenizer;

pub use keywords::{DEFAULT_MAX_KEYWORDS, extract_keywords};
pub use normalizer::normalize;
pub use overlap::token_overlap_score;
pub use stop_words::is_stop_word;
pub use tokenizer::tokenize;
