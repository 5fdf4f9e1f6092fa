//! Error types for the tension analysis worker.
//!
//! This module defines the central error type [`TensionError`] shared by all
//! worker crates, along with the [`TensionResult<T>`] type alias.
//!
//! # Design Principles
//!
//! - **FAIL FAST**: every load-time failure (missing resource, malformed
//!   record, model deserialization) is fatal. The worker never starts with a
//!   partially built knowledge base.
//! - **CONTEXTUAL**: variants carry the path/line that failed.
//! - **TRACEABLE**: adapter errors preserve their cause via `source`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for resource loading and adapter calls.
///
/// Load-phase variants (`ResourceNotFound`, `MalformedRecord`, `ModelLoad`,
/// `Config`, `Io`) are unrecoverable: the process must not serve requests
/// after observing one. `ParseService` occurs at query time and is surfaced
/// to the caller rather than defaulted to an empty parse.
#[derive(Debug, Error)]
pub enum TensionError {
    /// A required file or directory is absent at the expected path.
    ///
    /// # When This Occurs
    ///
    /// - The configured data root does not exist
    /// - A lexicon, word list, model, or bundle file is missing
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        /// The path that was expected to exist
        path: PathBuf,
    },

    /// A lexicon row does not match the shape its format requires.
    ///
    /// # When This Occurs
    ///
    /// - A ratings row has fewer columns than the format guarantees
    /// - A numeric column fails to parse
    /// - A key-value line is missing its separator
    #[error("malformed record in {} at line {line}: {reason}", file.display())]
    MalformedRecord {
        /// Source file containing the bad row
        file: PathBuf,
        /// 1-based line number of the bad row
        line: usize,
        /// Description of the shape mismatch
        reason: String,
    },

    /// The pretrained model, tokenizer, or label-encoder bundle failed to
    /// deserialize.
    #[error("model load failed for {}: {source}", path.display())]
    ModelLoad {
        /// Artifact that failed to load
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A remote dependency-parse call failed or timed out.
    ///
    /// There is no local fallback parser; callers see this error directly.
    #[error("parse service error: {message}")]
    ParseService {
        /// Transport or decode failure description
        message: String,
    },

    /// Text could not be encoded into token ids.
    #[error("tokenization error: {message}")]
    Tokenization {
        /// Encoder failure description
        message: String,
    },

    /// The classifier's forward pass failed.
    #[error("inference error: {message}")]
    Inference {
        /// Tensor-operation failure description
        message: String,
    },

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O failure while reading a resource.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for TensionError {
    fn from(err: config::ConfigError) -> Self {
        TensionError::Config(err.to_string())
    }
}

/// Result type alias for worker operations.
pub type TensionResult<T> = Result<T, TensionError>;
