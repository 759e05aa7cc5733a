//! Error types for the Peyda chatbot core.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`PeydaError`] enum. The analysis and classification layers are pure
//! and cannot fail at runtime; in practice only the item/tag store boundary
//! produces errors, and those are propagated to the caller unchanged rather
//! than being mapped to an empty result set.
//!
//! # Examples
//!
//! ```
//! use peyda::error::{PeydaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PeydaError::store("tag lookup failed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Peyda operations.
#[derive(Error, Debug)]
pub enum PeydaError {
    /// I/O errors (reading seed files, terminal output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (normalization, tokenization, keyword extraction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Intent classification errors (corpus construction, scoring)
    #[error("Classification error: {0}")]
    Classification(String),

    /// Item/tag store errors (the external fetch boundary)
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PeydaError.
pub type Result<T> = std::result::Result<T, PeydaError>;

impl PeydaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PeydaError::Analysis(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        PeydaError::Classification(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        PeydaError::Store(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PeydaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PeydaError::Other(msg.into())
    }
}
