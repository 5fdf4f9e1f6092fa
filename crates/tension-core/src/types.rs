//! Shared value types for affective lexicon entries.

use serde::{Deserialize, Serialize};

/// The fixed emotion label set used across every emotion-intensity lexicon.
///
/// Order matters: [`EmotionLabel::ALL`] iterates in the canonical order the
/// lexicon columns are mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
}

impl EmotionLabel {
    /// All labels in canonical order.
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Anger,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Surprise,
    ];

    /// Lowercase name as it appears in lexicon headers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Surprise => "surprise",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion intensities for one word, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct EmotionVector {
    pub anger: f32,
    pub disgust: f32,
    pub fear: f32,
    pub joy: f32,
    pub sadness: f32,
    pub surprise: f32,
}

impl EmotionVector {
    /// Intensity for a single label.
    #[must_use]
    pub fn get(&self, label: EmotionLabel) -> f32 {
        match label {
            EmotionLabel::Anger => self.anger,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Joy => self.joy,
            EmotionLabel::Sadness => self.sadness,
            EmotionLabel::Surprise => self.surprise,
        }
    }
}

/// Dimensional-affect record for one word, each dimension in [0,1]
/// after normalization from the source's native 1-9 scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AffectRating {
    pub valence: f32,
    pub arousal: f32,
    pub dominance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_is_canonical() {
        let names: Vec<&str> = EmotionLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            ["anger", "disgust", "fear", "joy", "sadness", "surprise"]
        );
    }

    #[test]
    fn test_emotion_vector_get_matches_fields() {
        let v = EmotionVector {
            anger: 0.1,
            disgust: 0.2,
            fear: 0.3,
            joy: 0.4,
            sadness: 0.5,
            surprise: 0.6,
        };
        assert_eq!(v.get(EmotionLabel::Anger), 0.1);
        assert_eq!(v.get(EmotionLabel::Surprise), 0.6);
    }
}
