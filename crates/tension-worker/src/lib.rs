//! Feature-resource preload for the tension analysis worker.
//!
//! This crate assembles the affective knowledge base the scoring pipeline
//! queries at inference time:
//!
//! - **EmotionClassifier**: thread-safe inference handle over the
//!   pretrained model weights
//! - **TokenizerBundle**: both pretrained tokenizers, their fixed sequence
//!   lengths, and the label encoder
//! - **DepparseClient**: blocking client for the remote dependency-parse
//!   service
//! - **FeatureResourceRegistry**: the immutable aggregate of all of the
//!   above plus every lexicon table, built once by a blocking load pass
//!
//! The `warmup` binary exercises the full load path end to end.

pub mod bundle;
pub mod depparse;
pub mod model;
pub mod registry;

pub use bundle::{LabelEncoder, TokenizerBundle};
pub use depparse::{triples_from_response, DependencyTriple, DepparseClient, ParseResponse};
pub use model::EmotionClassifier;
pub use registry::FeatureResourceRegistry;
