//! # Peyda
//!
//! A bilingual (English/Persian) rule-based chatbot core for a campus
//! lost & found service.
//!
//! ## Features
//!
//! - Pure Rust, dependency-free text pipeline (normalization, tokenization,
//!   stop-word filtering, keyword extraction)
//! - Token-overlap intent classification over a static bilingual corpus
//! - Hint-driven item search detection with feature-question precedence
//! - Keyword search with substring ranking over a pluggable item store
//! - Uniform JSON response envelope for the presentation layer

pub mod analysis;
pub mod chatbot;
pub mod cli;
pub mod error;
pub mod intent;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
