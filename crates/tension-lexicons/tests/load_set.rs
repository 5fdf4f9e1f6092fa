//! End-to-end load of a complete fixture resource tree.

use std::fs;
use std::path::Path;

use tension_core::TensionError;
use tension_lexicons::{LexiconSet, ResourcePaths};

const EMOTION_HEADER: &str =
    "word\tanger\tanticipation\tdisgust\tfear\tjoy\tnegative\tpositive\tsadness\tsurprise\n";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Build a minimal but complete data root.
fn fixture_root(dir: &Path) {
    // Model artifacts only need to exist for path resolution here.
    write(dir, "models/model.safetensors", "");
    write(dir, "models/variables.json", "{}");

    write(
        dir,
        "resources/booster_words.txt",
        "# boosters\nabsolutely\nvery\n",
    );
    write(dir, "resources/cues.txt", "# cues\nwar\nfuneral\n");
    write(
        dir,
        "resources/hedge_words.txt",
        "# hedges\nmaybe\n\nperhaps\n",
    );
    write(
        dir,
        "resources/discourse_markers.txt",
        "# markers\nhowever\ntherefore\n",
    );

    write(
        dir,
        "lexicons/Ratings_Warriner_et_al.csv",
        "Idx,Word,V.Mean.Sum,V.SD,V.Rat,A.Mean.Sum,A.SD,A.Rat,D.Mean.Sum\n\
         1,calm,5.0,1.0,20,1.0,1.0,20,9.0\n",
    );
    write(
        dir,
        "lexicons/NRC-emotion-lexicon-wordlevel-v0.92.txt",
        &format!("{EMOTION_HEADER}grief\t1\t0\t0\t0\t0\t1\t0\t1\t0\n"),
    );
    write(
        dir,
        "lexicons/nrc_affect_intensity.txt",
        &format!("{EMOTION_HEADER}outraged\t0.964\t0\t0.5\t0.2\t0\t0\t0\t0.1\t0.3\n"),
    );
    write(
        dir,
        "lexicons/NRC-Hashtag-Emotion-Lexicon-v0.2.txt",
        &format!("{EMOTION_HEADER}#proud\t0\t0\t0\t0\t0.8\t0\t0\t0\t0.2\n"),
    );
    write(
        dir,
        "lexicons/BingLiu.txt",
        "envious\tnegative\ncalm\tpositive\n",
    );
    write(
        dir,
        "lexicons/mpqa.txt",
        "envious\tpositive\nserene\tpositive\n",
    );
    write(dir, "lexicons/AFINN-en-165.txt", "abandon\t-2\nbest\t5\n");
    write(dir, "lexicons/stopwords.txt", "a\nan\nthe\n");
    write(
        dir,
        "lexicons/slangs.txt",
        "lol,laughing out loud\nidk,i don't know\n",
    );
    write(
        dir,
        "lexicons/negated_words.txt",
        "not good,bad\nnot bad,good, actually fine\n",
    );
    write(dir, "lexicons/emoticons.txt", ":)\n:-(\n#)\n");
}

#[test]
fn test_full_load_produces_every_table() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());

    let paths = ResourcePaths::resolve(dir.path()).unwrap();
    let set = LexiconSet::load(&paths).unwrap();

    // Word lists, with their per-source comment/blank conventions.
    assert_eq!(set.boosters().terms(), ["absolutely", "very"]);
    assert_eq!(set.hedge_words().terms(), ["maybe", "perhaps"]);
    assert!(set.stopwords().contains("the"));
    assert!(set.emoticons().contains("#)"));

    // Ratings normalized from the 1-9 native scale.
    let calm = set.affect_ratings().get("calm").unwrap();
    assert_eq!(calm.valence, 0.5);
    assert_eq!(calm.arousal, 0.0);
    assert_eq!(calm.dominance, 1.0);

    // Non-contiguous emotion column selection.
    let outraged = set.nrc_affect_intensity().get("outraged").unwrap();
    assert_eq!(outraged.anger, 0.964);
    assert_eq!(outraged.fear, 0.5);

    // Hashtag keys are stored bare.
    assert!(set.nrc_hashtag_emotion().get("#proud").is_none());
    assert_eq!(set.nrc_hashtag_emotion().get("proud").unwrap().joy, 0.8);

    // BingLiu declared first, so it wins the shared key.
    assert_eq!(
        set.sentiment_polarity().get("envious").map(String::as_str),
        Some("negative")
    );
    assert_eq!(
        set.sentiment_polarity().get("serene").map(String::as_str),
        Some("positive")
    );

    // AFINN normalized from -5..5.
    assert_eq!(set.afinn().get("best"), Some(&1.0));

    // First-comma split keeps embedded commas in the value.
    assert_eq!(
        set.negated_words().get("not bad").map(String::as_str),
        Some("good, actually fine")
    );
}

#[test]
fn test_loading_twice_yields_identical_tables() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    let paths = ResourcePaths::resolve(dir.path()).unwrap();

    let first = LexiconSet::load(&paths).unwrap();
    let second = LexiconSet::load(&paths).unwrap();

    assert_eq!(first.affect_ratings(), second.affect_ratings());
    assert_eq!(first.nrc_emotion(), second.nrc_emotion());
    assert_eq!(first.sentiment_polarity(), second.sentiment_polarity());
    assert_eq!(first.afinn(), second.afinn());
    assert_eq!(first.stopwords(), second.stopwords());
}

#[test]
fn test_missing_lexicon_fails_resolution() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    fs::remove_file(dir.path().join("lexicons/mpqa.txt")).unwrap();

    let err = ResourcePaths::resolve(dir.path()).unwrap_err();
    match err {
        TensionError::ResourceNotFound { path } => assert!(path.ends_with("lexicons/mpqa.txt")),
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_truncated_row_prevents_set_construction() {
    let dir = tempfile::tempdir().unwrap();
    fixture_root(dir.path());
    write(
        dir.path(),
        "lexicons/Ratings_Warriner_et_al.csv",
        "Idx,Word,V.Mean.Sum,V.SD,V.Rat,A.Mean.Sum,A.SD,A.Rat,D.Mean.Sum\n1,calm,5.0\n",
    );

    let paths = ResourcePaths::resolve(dir.path()).unwrap();
    assert!(matches!(
        LexiconSet::load(&paths),
        Err(TensionError::MalformedRecord { .. })
    ));
}
