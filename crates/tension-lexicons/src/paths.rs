//! Resource locator: resolves the configured data root into concrete paths.
//!
//! Resolution verifies that the root and every required file exist up front.
//! A missing resource is fatal at startup; there is no partial-resource
//! operation mode.

use std::path::{Path, PathBuf};

use tension_core::{TensionError, TensionResult};

/// Absolute paths for every resource the worker loads.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    /// Classifier weights (`models/model.safetensors`)
    pub model_weights: PathBuf,
    /// Tokenizer + label-encoder bundle (`models/variables.json`)
    pub variables_bundle: PathBuf,

    pub booster_words: PathBuf,
    pub cues: PathBuf,
    pub hedge_words: PathBuf,
    pub discourse_markers: PathBuf,

    pub affect_ratings: PathBuf,
    pub nrc_emotion: PathBuf,
    pub nrc_affect_intensity: PathBuf,
    pub nrc_hashtag_emotion: PathBuf,
    pub bingliu: PathBuf,
    pub mpqa: PathBuf,
    pub afinn: PathBuf,
    pub stopwords: PathBuf,
    pub slangs: PathBuf,
    pub negated_words: PathBuf,
    pub emoticons: PathBuf,
}

impl ResourcePaths {
    /// Resolve every resource path under `root`, verifying each exists.
    ///
    /// # Errors
    ///
    /// Returns [`TensionError::ResourceNotFound`] if the root directory is
    /// missing or any required file is absent.
    pub fn resolve(root: &Path) -> TensionResult<Self> {
        if !root.is_dir() {
            return Err(TensionError::ResourceNotFound {
                path: root.to_path_buf(),
            });
        }

        let paths = Self {
            model_weights: root.join("models/model.safetensors"),
            variables_bundle: root.join("models/variables.json"),

            booster_words: root.join("resources/booster_words.txt"),
            cues: root.join("resources/cues.txt"),
            hedge_words: root.join("resources/hedge_words.txt"),
            discourse_markers: root.join("resources/discourse_markers.txt"),

            affect_ratings: root.join("lexicons/Ratings_Warriner_et_al.csv"),
            nrc_emotion: root.join("lexicons/NRC-emotion-lexicon-wordlevel-v0.92.txt"),
            nrc_affect_intensity: root.join("lexicons/nrc_affect_intensity.txt"),
            nrc_hashtag_emotion: root.join("lexicons/NRC-Hashtag-Emotion-Lexicon-v0.2.txt"),
            bingliu: root.join("lexicons/BingLiu.txt"),
            mpqa: root.join("lexicons/mpqa.txt"),
            afinn: root.join("lexicons/AFINN-en-165.txt"),
            stopwords: root.join("lexicons/stopwords.txt"),
            slangs: root.join("lexicons/slangs.txt"),
            negated_words: root.join("lexicons/negated_words.txt"),
            emoticons: root.join("lexicons/emoticons.txt"),
        };

        for path in paths.all() {
            if !path.is_file() {
                return Err(TensionError::ResourceNotFound { path: path.clone() });
            }
        }

        Ok(paths)
    }

    fn all(&self) -> [&PathBuf; 17] {
        [
            &self.model_weights,
            &self.variables_bundle,
            &self.booster_words,
            &self.cues,
            &self.hedge_words,
            &self.discourse_markers,
            &self.affect_ratings,
            &self.nrc_emotion,
            &self.nrc_affect_intensity,
            &self.nrc_hashtag_emotion,
            &self.bingliu,
            &self.mpqa,
            &self.afinn,
            &self.stopwords,
            &self.slangs,
            &self.negated_words,
            &self.emoticons,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_fatal() {
        let result = ResourcePaths::resolve(Path::new("/nonexistent/tension/data"));
        assert!(matches!(
            result,
            Err(TensionError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        // Root exists but is empty, so the first required file is reported.
        let err = ResourcePaths::resolve(dir.path()).unwrap_err();
        match err {
            TensionError::ResourceNotFound { path } => {
                assert!(path.ends_with("models/model.safetensors"));
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }
}
