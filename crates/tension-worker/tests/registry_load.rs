//! End-to-end registry load against a complete fixture data root.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use tension_core::{Config, TensionError};
use tension_worker::FeatureResourceRegistry;

const EMOTION_HEADER: &str =
    "word\tanger\tanticipation\tdisgust\tfear\tjoy\tnegative\tpositive\tsadness\tsurprise\n";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_model(root: &Path, num_classes: usize) {
    let device = Device::Cpu;
    let mut tensors = HashMap::new();
    tensors.insert(
        "embedding.weight".to_string(),
        Tensor::rand(-1.0f32, 1.0, (8, 4), &device).unwrap(),
    );
    tensors.insert(
        "dense.weight".to_string(),
        Tensor::rand(-1.0f32, 1.0, (3, 4), &device).unwrap(),
    );
    tensors.insert(
        "dense.bias".to_string(),
        Tensor::zeros((3,), DType::F32, &device).unwrap(),
    );
    tensors.insert(
        "output.weight".to_string(),
        Tensor::rand(-1.0f32, 1.0, (num_classes, 3), &device).unwrap(),
    );
    tensors.insert(
        "output.bias".to_string(),
        Tensor::zeros((num_classes,), DType::F32, &device).unwrap(),
    );

    let path = root.join("models/model.safetensors");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    candle_core::safetensors::save(&tensors, path).unwrap();
}

fn write_bundle(root: &Path) {
    let tokenizer = serde_json::json!({
        "version": "1.0",
        "pre_tokenizer": { "type": "Whitespace" },
        "model": {
            "type": "WordLevel",
            "vocab": { "[UNK]": 0, "so": 1, "tense": 2, "today": 3 },
            "unk_token": "[UNK]"
        }
    });
    let bundle = serde_json::json!({
        "labels": ["anger", "joy", "sadness"],
        "max_tweet_length": 6,
        "tweet_tokenizer": tokenizer.clone(),
        "max_hash_emo_length": 4,
        "hash_emo_tokenizer": tokenizer,
    });
    write(
        root,
        "models/variables.json",
        &serde_json::to_string(&bundle).unwrap(),
    );
}

fn fixture_root(root: &Path) {
    write_model(root, 3);
    write_bundle(root);

    write(root, "resources/booster_words.txt", "# boosters\nvery\n");
    write(root, "resources/cues.txt", "war\n");
    write(root, "resources/hedge_words.txt", "# hedges\nmaybe\n");
    write(root, "resources/discourse_markers.txt", "however\n");

    write(
        root,
        "lexicons/Ratings_Warriner_et_al.csv",
        "Idx,Word,V.Mean.Sum,V.SD,V.Rat,A.Mean.Sum,A.SD,A.Rat,D.Mean.Sum\n\
         1,calm,5.0,1.0,20,1.0,1.0,20,9.0\n",
    );
    write(
        root,
        "lexicons/NRC-emotion-lexicon-wordlevel-v0.92.txt",
        &format!("{EMOTION_HEADER}grief\t1\t0\t0\t0\t0\t1\t0\t1\t0\n"),
    );
    write(
        root,
        "lexicons/nrc_affect_intensity.txt",
        &format!("{EMOTION_HEADER}outraged\t0.964\t0\t0.5\t0.2\t0\t0\t0\t0.1\t0.3\n"),
    );
    write(
        root,
        "lexicons/NRC-Hashtag-Emotion-Lexicon-v0.2.txt",
        &format!("{EMOTION_HEADER}#proud\t0\t0\t0\t0\t0.8\t0\t0\t0\t0.2\n"),
    );
    write(root, "lexicons/BingLiu.txt", "envious\tnegative\n");
    write(root, "lexicons/mpqa.txt", "envious\tpositive\nserene\tpositive\n");
    write(root, "lexicons/AFINN-en-165.txt", "abandon\t-2\nbest\t5\n");
    write(root, "lexicons/stopwords.txt", "a\nthe\n");
    write(root, "lexicons/slangs.txt", "lol,laughing out loud\n");
    write(root, "lexicons/negated_words.txt", "not good,bad\n");
    write(root, "lexicons/emoticons.txt", ":)\n");
}

fn config_for(root: &Path) -> Config {
    Config {
        data_root: root.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn test_full_registry_load_and_query() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());

    let registry = FeatureResourceRegistry::load(&config_for(dir.path())).unwrap();

    // Lexicons made it through parse, normalize, and merge.
    assert_eq!(registry.lexicons().affect_ratings().len(), 1);
    assert_eq!(
        registry
            .lexicons()
            .sentiment_polarity()
            .get("envious")
            .map(String::as_str),
        Some("negative")
    );

    // Tokenizer encode feeds the prepared classifier directly.
    let ids = registry.bundle().encode_tweet("so tense today").unwrap();
    assert_eq!(ids.len(), registry.bundle().max_tweet_length());

    let distribution = registry.classifier().predict(&ids).unwrap();
    assert_eq!(distribution.len(), 3);
    let total: f32 = distribution.iter().sum();
    assert!((total - 1.0).abs() < 1e-5);

    // Label decode covers the whole distribution.
    let encoder = registry.bundle().label_encoder();
    assert_eq!(encoder.decode(0), Some("anger"));
    assert_eq!(encoder.decode(distribution.len() - 1), Some("sadness"));
}

#[test]
fn test_missing_model_file_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    fs::remove_file(dir.path().join("models/model.safetensors")).unwrap();

    let err = FeatureResourceRegistry::load(&config_for(dir.path())).unwrap_err();
    match err {
        TensionError::ResourceNotFound { path } => {
            assert!(path.ends_with("models/model.safetensors"));
        }
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_class_count_mismatch_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    // Rewrite the weights with an output layer disagreeing with the bundle.
    write_model(dir.path(), 5);

    assert!(matches!(
        FeatureResourceRegistry::load(&config_for(dir.path())),
        Err(TensionError::ModelLoad { .. })
    ));
}

#[test]
fn test_malformed_lexicon_aborts_before_model_load() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    write(dir.path(), "lexicons/BingLiu.txt", "no separator here\n");

    assert!(matches!(
        FeatureResourceRegistry::load(&config_for(dir.path())),
        Err(TensionError::MalformedRecord { .. })
    ));
}
