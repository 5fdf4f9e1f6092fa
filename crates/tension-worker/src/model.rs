//! Pretrained emotion-classifier adapter.
//!
//! Wraps the safetensors weight file behind a handle whose inference can be
//! invoked from any caller thread. The device and weight tensors are owned
//! exclusively by the adapter and never exposed; [`EmotionClassifier::prepare`]
//! runs one throwaway forward pass after load so the execution state is
//! settled before concurrent callers arrive.
//!
//! Forward graph: token-embedding lookup, mean pooling over non-padding
//! positions, dense tanh layer, dense output layer, softmax.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{Device, Tensor, D};

use tension_core::{TensionError, TensionResult};

const EMBEDDING_WEIGHT: &str = "embedding.weight";
const DENSE_WEIGHT: &str = "dense.weight";
const DENSE_BIAS: &str = "dense.bias";
const OUTPUT_WEIGHT: &str = "output.weight";
const OUTPUT_BIAS: &str = "output.bias";

/// Token id 0 is reserved for padding and carries no content.
const PAD_ID: u32 = 0;

/// Thread-safe inference handle over the pretrained classifier.
#[derive(Debug)]
pub struct EmotionClassifier {
    device: Device,
    embedding: Tensor,
    dense_weight: Tensor,
    dense_bias: Tensor,
    output_weight: Tensor,
    output_bias: Tensor,
    num_classes: usize,
}

impl EmotionClassifier {
    /// Load the classifier weights from a safetensors file.
    ///
    /// `num_classes` is the class count the label encoder dictates; a
    /// mismatching output layer is rejected at load rather than surfacing
    /// as a shape error mid-inference.
    ///
    /// # Errors
    ///
    /// Returns [`TensionError::ModelLoad`] if the file cannot be
    /// deserialized, a required tensor is absent, or the output dimension
    /// disagrees with `num_classes`. Fatal at startup.
    pub fn load(path: &Path, num_classes: usize) -> TensionResult<Self> {
        let device = Device::Cpu;
        let tensors = candle_core::safetensors::load(path, &device).map_err(|e| {
            TensionError::ModelLoad {
                path: path.to_path_buf(),
                source: Box::new(e),
            }
        })?;

        let embedding = take_tensor(&tensors, EMBEDDING_WEIGHT, path)?;
        let dense_weight = take_tensor(&tensors, DENSE_WEIGHT, path)?;
        let dense_bias = take_tensor(&tensors, DENSE_BIAS, path)?;
        let output_weight = take_tensor(&tensors, OUTPUT_WEIGHT, path)?;
        let output_bias = take_tensor(&tensors, OUTPUT_BIAS, path)?;

        let output_rows = output_weight.dim(0).map_err(|e| TensionError::ModelLoad {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        if output_rows != num_classes {
            return Err(TensionError::ModelLoad {
                path: path.to_path_buf(),
                source: format!(
                    "output layer has {output_rows} classes, label encoder lists {num_classes}"
                )
                .into(),
            });
        }

        tracing::info!(
            classes = num_classes,
            vocab = embedding.dim(0).unwrap_or(0),
            "emotion classifier loaded"
        );

        Ok(Self {
            device,
            embedding,
            dense_weight,
            dense_bias,
            output_weight,
            output_bias,
            num_classes,
        })
    }

    /// Run one throwaway inference so the handle is safely reusable from
    /// any caller context.
    ///
    /// Called once after load; skipping it leaves the first real caller to
    /// pay for lazily initialized execution state.
    pub fn prepare(&self) -> TensionResult<()> {
        let probe = [1u32];
        let _ = self.predict(&probe)?;
        tracing::debug!("classifier prepared for concurrent inference");
        Ok(())
    }

    /// Label distribution for a token-id sequence, ordered as the label
    /// encoder's classes.
    ///
    /// Padding ids are excluded from pooling. An all-padding or empty
    /// sequence is a [`TensionError::Tokenization`] error.
    pub fn predict(&self, token_ids: &[u32]) -> TensionResult<Vec<f32>> {
        let content_ids: Vec<u32> = token_ids
            .iter()
            .copied()
            .filter(|&id| id != PAD_ID)
            .collect();
        if content_ids.is_empty() {
            return Err(TensionError::Tokenization {
                message: "token sequence holds no content ids".to_string(),
            });
        }

        let ids = Tensor::from_slice(&content_ids, (content_ids.len(),), &self.device)
            .map_err(inference_error)?;

        let embedded = self
            .embedding
            .index_select(&ids, 0)
            .map_err(inference_error)?;
        let pooled = embedded
            .mean(0)
            .map_err(inference_error)?
            .unsqueeze(0)
            .map_err(inference_error)?;

        let hidden = pooled
            .matmul(&self.dense_weight.t().map_err(inference_error)?)
            .map_err(inference_error)?
            .broadcast_add(&self.dense_bias)
            .map_err(inference_error)?
            .tanh()
            .map_err(inference_error)?;

        let logits = hidden
            .matmul(&self.output_weight.t().map_err(inference_error)?)
            .map_err(inference_error)?
            .broadcast_add(&self.output_bias)
            .map_err(inference_error)?;

        let distribution = candle_nn::ops::softmax(&logits, D::Minus1)
            .map_err(inference_error)?
            .flatten_all()
            .map_err(inference_error)?
            .to_vec1::<f32>()
            .map_err(inference_error)?;

        debug_assert_eq!(distribution.len(), self.num_classes);
        Ok(distribution)
    }

    /// Number of output classes.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }
}

fn take_tensor(
    tensors: &HashMap<String, Tensor>,
    name: &str,
    path: &Path,
) -> TensionResult<Tensor> {
    tensors
        .get(name)
        .cloned()
        .ok_or_else(|| TensionError::ModelLoad {
            path: path.to_path_buf(),
            source: format!("missing tensor {name:?}").into(),
        })
}

fn inference_error(e: candle_core::Error) -> TensionError {
    TensionError::Inference {
        message: e.to_string(),
    }
}
