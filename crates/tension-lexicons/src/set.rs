//! Single-pass loader assembling every lexicon table and word list.
//!
//! # Fail-Fast Behavior
//!
//! Loading runs to completion or fails on the first bad file. There is no
//! partial-lexicon mode: a [`LexiconSet`] either holds every table or was
//! never constructed.

use tension_core::{AffectRating, EmotionVector, TensionResult};

use crate::merge;
use crate::normalize::ScaleRange;
use crate::parse::{
    parse_affect_ratings, parse_comma_lexicon, parse_emotion_lexicon, parse_tab_lexicon,
    parse_tab_scores, parse_word_list, WordListFormat,
};
use crate::paths::ResourcePaths;
use crate::table::{LexiconTable, WordList};

/// The finished, read-only collection of every lexicon resource.
///
/// Built once at startup and immutable afterward; safe for concurrent
/// read-only access without locking.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    boosters: WordList,
    cues: WordList,
    hedge_words: WordList,
    discourse_markers: WordList,
    stopwords: WordList,
    emoticons: WordList,

    affect_ratings: LexiconTable<AffectRating>,
    nrc_emotion: LexiconTable<EmotionVector>,
    nrc_affect_intensity: LexiconTable<EmotionVector>,
    nrc_hashtag_emotion: LexiconTable<EmotionVector>,
    sentiment_polarity: LexiconTable<String>,
    afinn: LexiconTable<f32>,
    slangs: LexiconTable<String>,
    negated_words: LexiconTable<String>,
}

impl LexiconSet {
    /// Load every lexicon from the resolved resource paths.
    ///
    /// Sources feeding one logical table are folded under first-source-wins
    /// precedence in their declared order (BingLiu before MPQA).
    pub fn load(paths: &ResourcePaths) -> TensionResult<Self> {
        tracing::info!("loading word lists");
        let boosters = parse_word_list(&paths.booster_words, "boosters", WordListFormat::COMMENTED)?;
        let cues = parse_word_list(&paths.cues, "cues", WordListFormat::COMMENTED)?;
        let hedge_words = parse_word_list(
            &paths.hedge_words,
            "hedge_words",
            WordListFormat::COMMENTED_COMPACT,
        )?;
        let discourse_markers = parse_word_list(
            &paths.discourse_markers,
            "discourse_markers",
            WordListFormat::COMMENTED_COMPACT,
        )?;
        let stopwords = parse_word_list(&paths.stopwords, "stopwords", WordListFormat::PLAIN)?;
        let emoticons = parse_word_list(&paths.emoticons, "emoticons", WordListFormat::PLAIN)?;

        tracing::info!("loading emotion lexicons");
        let affect_ratings = parse_affect_ratings(&paths.affect_ratings)?;
        let nrc_emotion = parse_emotion_lexicon(&paths.nrc_emotion, "nrc_emotion", false)?;
        let nrc_affect_intensity =
            parse_emotion_lexicon(&paths.nrc_affect_intensity, "nrc_affect_intensity", false)?;
        let nrc_hashtag_emotion =
            parse_emotion_lexicon(&paths.nrc_hashtag_emotion, "nrc_hashtag_emotion", true)?;

        let bingliu = parse_tab_lexicon(&paths.bingliu, "bingliu")?;
        let mpqa = parse_tab_lexicon(&paths.mpqa, "mpqa")?;
        let sentiment_polarity = merge::first_wins("sentiment_polarity", vec![bingliu, mpqa]);

        let afinn = parse_tab_scores(&paths.afinn, "afinn", ScaleRange::POLARITY_INTENSITY)?;
        let slangs = parse_comma_lexicon(&paths.slangs, "slangs")?;
        let negated_words = parse_comma_lexicon(&paths.negated_words, "negated_words")?;

        tracing::info!(
            affect_ratings = affect_ratings.len(),
            nrc_emotion = nrc_emotion.len(),
            nrc_affect_intensity = nrc_affect_intensity.len(),
            nrc_hashtag_emotion = nrc_hashtag_emotion.len(),
            sentiment_polarity = sentiment_polarity.len(),
            afinn = afinn.len(),
            slangs = slangs.len(),
            negated_words = negated_words.len(),
            "lexicons loaded"
        );

        Ok(Self {
            boosters,
            cues,
            hedge_words,
            discourse_markers,
            stopwords,
            emoticons,
            affect_ratings,
            nrc_emotion,
            nrc_affect_intensity,
            nrc_hashtag_emotion,
            sentiment_polarity,
            afinn,
            slangs,
            negated_words,
        })
    }

    #[must_use]
    pub fn boosters(&self) -> &WordList {
        &self.boosters
    }

    #[must_use]
    pub fn cues(&self) -> &WordList {
        &self.cues
    }

    #[must_use]
    pub fn hedge_words(&self) -> &WordList {
        &self.hedge_words
    }

    #[must_use]
    pub fn discourse_markers(&self) -> &WordList {
        &self.discourse_markers
    }

    #[must_use]
    pub fn stopwords(&self) -> &WordList {
        &self.stopwords
    }

    #[must_use]
    pub fn emoticons(&self) -> &WordList {
        &self.emoticons
    }

    /// Dimensional affect ratings, normalized per dimension.
    #[must_use]
    pub fn affect_ratings(&self) -> &LexiconTable<AffectRating> {
        &self.affect_ratings
    }

    #[must_use]
    pub fn nrc_emotion(&self) -> &LexiconTable<EmotionVector> {
        &self.nrc_emotion
    }

    #[must_use]
    pub fn nrc_affect_intensity(&self) -> &LexiconTable<EmotionVector> {
        &self.nrc_affect_intensity
    }

    /// Hashtag-authored emotion intensities, keyed by bare word.
    #[must_use]
    pub fn nrc_hashtag_emotion(&self) -> &LexiconTable<EmotionVector> {
        &self.nrc_hashtag_emotion
    }

    /// Merged polarity table; BingLiu is authoritative over MPQA.
    #[must_use]
    pub fn sentiment_polarity(&self) -> &LexiconTable<String> {
        &self.sentiment_polarity
    }

    /// Polarity-intensity scores normalized from the native -5..5 scale.
    #[must_use]
    pub fn afinn(&self) -> &LexiconTable<f32> {
        &self.afinn
    }

    #[must_use]
    pub fn slangs(&self) -> &LexiconTable<String> {
        &self.slangs
    }

    #[must_use]
    pub fn negated_words(&self) -> &LexiconTable<String> {
        &self.negated_words
    }
}
