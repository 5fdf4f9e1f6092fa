//! Tokenizer and label-encoder bundle.
//!
//! The bundle is a single JSON artifact holding the two pretrained
//! tokenizers (tweet and hashtag-emotion), their fixed maximum sequence
//! lengths, and the ordered class-label list the classifier was trained
//! against.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tokenizers::Tokenizer;

use tension_core::{TensionError, TensionResult};

/// On-disk bundle shape. The tokenizer definitions are embedded verbatim in
/// the tokenizers JSON format.
#[derive(Debug, Deserialize)]
struct RawBundle {
    labels: Vec<String>,
    max_tweet_length: usize,
    tweet_tokenizer: serde_json::Value,
    max_hash_emo_length: usize,
    hash_emo_tokenizer: serde_json::Value,
}

/// Bidirectional label <-> class-index map.
///
/// Index order is the training order from the bundle; the classifier's
/// output distribution is ordered the same way.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    fn new(labels: Vec<String>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        Self { labels, index }
    }

    /// Label for a class index, or `None` when out of range.
    #[must_use]
    pub fn decode(&self, class: usize) -> Option<&str> {
        self.labels.get(class).map(String::as_str)
    }

    /// Class index for a label, or `None` for an unknown label.
    #[must_use]
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the encoder holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels in class-index order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// The deserialized bundle: both tokenizers, their fixed lengths, and the
/// label encoder.
#[derive(Debug)]
pub struct TokenizerBundle {
    tweet_tokenizer: Tokenizer,
    max_tweet_length: usize,
    hash_emo_tokenizer: Tokenizer,
    max_hash_emo_length: usize,
    label_encoder: LabelEncoder,
}

impl TokenizerBundle {
    /// Deserialize the bundle from its JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns [`TensionError::ModelLoad`] if the file is not valid bundle
    /// JSON, either embedded tokenizer fails to deserialize, the label list
    /// is empty, or a fixed length is zero. All are fatal at startup.
    pub fn load(path: &Path) -> TensionResult<Self> {
        let content = fs::read(path)?;
        let raw: RawBundle =
            serde_json::from_slice(&content).map_err(|e| TensionError::ModelLoad {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        if raw.labels.is_empty() {
            return Err(load_error(path, "bundle lists no class labels"));
        }
        if raw.max_tweet_length == 0 || raw.max_hash_emo_length == 0 {
            return Err(load_error(path, "bundle sequence lengths must be nonzero"));
        }

        let tweet_tokenizer = tokenizer_from_value(path, &raw.tweet_tokenizer)?;
        let hash_emo_tokenizer = tokenizer_from_value(path, &raw.hash_emo_tokenizer)?;

        tracing::info!(
            classes = raw.labels.len(),
            max_tweet_length = raw.max_tweet_length,
            max_hash_emo_length = raw.max_hash_emo_length,
            "tokenizer bundle loaded"
        );

        Ok(Self {
            tweet_tokenizer,
            max_tweet_length: raw.max_tweet_length,
            hash_emo_tokenizer,
            max_hash_emo_length: raw.max_hash_emo_length,
            label_encoder: LabelEncoder::new(raw.labels),
        })
    }

    /// Encode text with the tweet tokenizer, padded with id 0 or truncated
    /// to the fixed tweet length.
    pub fn encode_tweet(&self, text: &str) -> TensionResult<Vec<u32>> {
        encode_fixed(&self.tweet_tokenizer, text, self.max_tweet_length)
    }

    /// Encode text with the hashtag-emotion tokenizer, padded with id 0 or
    /// truncated to its fixed length.
    pub fn encode_hash_emo(&self, text: &str) -> TensionResult<Vec<u32>> {
        encode_fixed(&self.hash_emo_tokenizer, text, self.max_hash_emo_length)
    }

    /// Fixed sequence length for tweet-tokenized input.
    #[must_use]
    pub fn max_tweet_length(&self) -> usize {
        self.max_tweet_length
    }

    /// Fixed sequence length for hashtag-emotion-tokenized input.
    #[must_use]
    pub fn max_hash_emo_length(&self) -> usize {
        self.max_hash_emo_length
    }

    /// The label <-> class-index map.
    #[must_use]
    pub fn label_encoder(&self) -> &LabelEncoder {
        &self.label_encoder
    }
}

fn tokenizer_from_value(path: &Path, value: &serde_json::Value) -> TensionResult<Tokenizer> {
    let bytes = serde_json::to_vec(value).map_err(|e| TensionError::ModelLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    Tokenizer::from_bytes(&bytes).map_err(|e| TensionError::ModelLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

fn encode_fixed(tokenizer: &Tokenizer, text: &str, max_len: usize) -> TensionResult<Vec<u32>> {
    let encoding = tokenizer
        .encode(text, false)
        .map_err(|e| TensionError::Tokenization {
            message: e.to_string(),
        })?;

    let mut ids = encoding.get_ids().to_vec();
    ids.truncate(max_len);
    ids.resize(max_len, 0);
    Ok(ids)
}

fn load_error(path: &Path, message: &str) -> TensionError {
    TensionError::ModelLoad {
        path: path.to_path_buf(),
        source: message.to_string().into(),
    }
}
