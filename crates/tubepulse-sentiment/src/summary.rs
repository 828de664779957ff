//! Star-to-category mapping and the per-video sentiment tally.

use serde::Serialize;

use crate::classifier::{truncate_input, StarRating, TextClassifier};

/// Three-way simplification of the star scale used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentCategory {
    Negative,
    Neutral,
    Positive,
}

impl From<StarRating> for SentimentCategory {
    /// Total over the star scale: 0–1 negative, 2 neutral, 3–5 positive.
    fn from(label: StarRating) -> Self {
        match label {
            StarRating::Zero | StarRating::One => SentimentCategory::Negative,
            StarRating::Two => SentimentCategory::Neutral,
            StarRating::Three | StarRating::Four | StarRating::Five => SentimentCategory::Positive,
        }
    }
}

/// Aggregate sentiment for one video's comments.
///
/// `total_comments` counts every input comment, including ones whose
/// classification failed; neutral comments and failures account for the gap
/// between `total_comments` and `positive_comments + negative_comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub total_comments: usize,
    pub positive_comments: usize,
    pub negative_comments: usize,
}

impl SentimentSummary {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_comments: 0,
            positive_comments: 0,
            negative_comments: 0,
        }
    }
}

/// Classifies each comment and tallies categories.
///
/// Each comment is truncated to the classifier's input bound first. A
/// per-item classification failure skips that item (it contributes to
/// neither count) and logs a warning; the batch continues. Zero input
/// comments return a zero-filled summary without touching the classifier.
#[must_use]
pub fn summarize<C>(classifier: &C, comments: &[String]) -> SentimentSummary
where
    C: TextClassifier + ?Sized,
{
    if comments.is_empty() {
        return SentimentSummary::empty();
    }

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;
    let mut failed = 0usize;

    for comment in comments {
        match classifier.classify(truncate_input(comment)) {
            Ok(result) => match SentimentCategory::from(result.label) {
                SentimentCategory::Positive => positive += 1,
                SentimentCategory::Negative => negative += 1,
                SentimentCategory::Neutral => neutral += 1,
            },
            Err(e) => {
                failed += 1;
                tracing::warn!(error = %e, "comment classification failed; skipping item");
            }
        }
    }

    tracing::debug!(
        total = comments.len(),
        positive,
        negative,
        neutral,
        failed,
        "sentiment tally complete"
    );

    SentimentSummary {
        total_comments: comments.len(),
        positive_comments: positive,
        negative_comments: negative,
    }
}
