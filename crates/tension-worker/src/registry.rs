//! The feature-resource registry: everything the scoring pipeline queries.
//!
//! # Fail-Fast Behavior
//!
//! [`FeatureResourceRegistry::load`] is a blocking initialization barrier.
//! It either returns a complete registry or an error; no consumer can ever
//! observe a partially-initialized state. After construction the registry
//! is immutable and safe for concurrent read-only access; consumers receive
//! it by reference (or behind an `Arc`), never through global state.

use std::time::Instant;

use tension_core::{Config, TensionResult};
use tension_lexicons::{LexiconSet, ResourcePaths};

use crate::bundle::TokenizerBundle;
use crate::depparse::DepparseClient;
use crate::model::EmotionClassifier;

/// The finished, read-only aggregate of all lexicon tables plus the
/// classifier, tokenizer/label-encoder bundle, and parse-service handle.
#[derive(Debug)]
pub struct FeatureResourceRegistry {
    lexicons: LexiconSet,
    classifier: EmotionClassifier,
    bundle: TokenizerBundle,
    depparse: DepparseClient,
}

impl FeatureResourceRegistry {
    /// Run the single eager load pass.
    ///
    /// Phases, in order: resolve resource paths, parse and merge every
    /// lexicon, deserialize the tokenizer bundle, load the classifier and
    /// prepare it for concurrent inference, construct the parse client.
    /// Any failure aborts the whole pass.
    pub fn load(config: &Config) -> TensionResult<Self> {
        let started = Instant::now();

        tracing::info!(root = %config.data_root.display(), "resolving feature resources");
        let paths = ResourcePaths::resolve(&config.data_root)?;

        let lexicons = LexiconSet::load(&paths)?;

        tracing::info!("loading pretrained emotion recognition model");
        let bundle = TokenizerBundle::load(&paths.variables_bundle)?;
        let classifier =
            EmotionClassifier::load(&paths.model_weights, bundle.label_encoder().len())?;
        classifier.prepare()?;

        let depparse = DepparseClient::new(&config.depparse)?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            parse_endpoint = depparse.endpoint(),
            "feature resources ready"
        );

        Ok(Self {
            lexicons,
            classifier,
            bundle,
            depparse,
        })
    }

    /// Every lexicon table and word list, by name.
    #[must_use]
    pub fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    /// The prepared classifier inference handle.
    #[must_use]
    pub fn classifier(&self) -> &EmotionClassifier {
        &self.classifier
    }

    /// Tokenizer encode functions, fixed sequence lengths, and the label
    /// encoder.
    #[must_use]
    pub fn bundle(&self) -> &TokenizerBundle {
        &self.bundle
    }

    /// The dependency-parse service handle.
    #[must_use]
    pub fn depparse(&self) -> &DepparseClient {
        &self.depparse
    }
}
