//! Shared foundation for the tension analysis worker.
//!
//! This crate holds the pieces every other worker crate depends on:
//!
//! - **TensionError**: the central error taxonomy (resource, record, model,
//!   parse-service, config failures)
//! - **Config**: layered file/environment configuration with a single data
//!   root and the dependency-parse endpoint
//! - **Value types**: [`EmotionLabel`], [`EmotionVector`], [`AffectRating`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, DepparseConfig, LoggingConfig};
pub use error::{TensionError, TensionResult};
pub use types::{AffectRating, EmotionLabel, EmotionVector};
