//! Five-star sentiment classifier over a word-weight lexicon.

use std::collections::HashMap;

use crate::error::ClassifierError;

/// Maximum number of characters a classifier input may carry. Longer texts
/// are truncated to this prefix before classification.
pub const MAX_INPUT_CHARS: usize = 512;

/// Truncates `text` to a [`MAX_INPUT_CHARS`]-character prefix.
///
/// Character-prefix truncation, not word-boundary aware. Idempotent:
/// truncating an already-truncated text returns it unchanged.
#[must_use]
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Ordinal sentiment label on the 0–5 star scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarRating {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    /// All six labels, in ascending order.
    pub const ALL: [StarRating; 6] = [
        StarRating::Zero,
        StarRating::One,
        StarRating::Two,
        StarRating::Three,
        StarRating::Four,
        StarRating::Five,
    ];

    #[must_use]
    pub fn stars(self) -> u8 {
        match self {
            StarRating::Zero => 0,
            StarRating::One => 1,
            StarRating::Two => 2,
            StarRating::Three => 3,
            StarRating::Four => 4,
            StarRating::Five => 5,
        }
    }
}

/// Result of classifying one text: the star label and a confidence in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: StarRating,
    pub score: f32,
}

/// A text-sentiment classifier: text in, star label plus confidence out.
///
/// Implementations must truncate their input to [`MAX_INPUT_CHARS`]
/// themselves, so that classifying a pre-truncated text yields the same
/// result as classifying the original.
pub trait TextClassifier {
    /// Classifies a single text.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] when the backend fails on this input.
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

/// Word weights for video-comment sentiment.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed score is clamped to
/// `[-1.0, 1.0]` before star bucketing.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("favorite", 0.4),
    ("helpful", 0.4),
    ("informative", 0.4),
    ("funny", 0.3),
    ("beautiful", 0.4),
    ("brilliant", 0.5),
    ("perfect", 0.5),
    ("thanks", 0.3),
    ("thank", 0.3),
    ("subscribed", 0.4),
    ("recommend", 0.4),
    ("quality", 0.3),
    ("enjoyed", 0.4),
    ("underrated", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("boring", -0.4),
    ("hate", -0.5),
    ("hated", -0.5),
    ("dislike", -0.4),
    ("disliked", -0.4),
    ("waste", -0.5),
    ("clickbait", -0.5),
    ("misleading", -0.5),
    ("wrong", -0.3),
    ("scam", -0.6),
    ("spam", -0.5),
    ("annoying", -0.4),
    ("unwatchable", -0.6),
    ("disappointed", -0.4),
    ("disappointing", -0.4),
    ("cringe", -0.3),
    ("overrated", -0.3),
];

/// Lexicon-backed five-star classifier.
///
/// Builds its word index once in [`LexiconClassifier::new`]; after that the
/// instance is immutable and safe to share across concurrent requests behind
/// an `Arc`.
pub struct LexiconClassifier {
    weights: HashMap<&'static str, f32>,
}

impl LexiconClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }

    /// Sums lexicon weights over the words of `text`, clamped to
    /// `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
    fn raw_score(&self, text: &str) -> f32 {
        let mut score = 0.0_f32;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            if let Some(weight) = self.weights.get(w.as_str()) {
                score += weight;
            }
        }
        score.clamp(-1.0, 1.0)
    }

    /// Buckets a clamped score onto the star scale.
    fn bucket(score: f32) -> StarRating {
        if score <= -0.6 {
            StarRating::Zero
        } else if score <= -0.2 {
            StarRating::One
        } else if score < 0.2 {
            StarRating::Two
        } else if score < 0.5 {
            StarRating::Three
        } else if score < 0.8 {
            StarRating::Four
        } else {
            StarRating::Five
        }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClassifier for LexiconClassifier {
    /// Never fails; the `Result` satisfies the trait contract.
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let raw = self.raw_score(truncate_input(text));
        Ok(Classification {
            label: Self::bucket(raw),
            // Confidence grows with the magnitude of the lexicon evidence;
            // 0.5 when the text carries no signal at all.
            score: 0.5 + raw.abs() / 2.0,
        })
    }
}
