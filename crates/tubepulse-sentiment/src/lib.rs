//! Comment sentiment classification for TubePulse.
//!
//! A five-star text classifier behind the [`TextClassifier`] trait, a fixed
//! star-to-category mapping, and the per-video summary tally. The bundled
//! [`LexiconClassifier`] is constructed once at startup and shared read-only
//! across requests.

mod classifier;
mod error;
mod summary;

pub use classifier::{
    truncate_input, Classification, LexiconClassifier, StarRating, TextClassifier,
    MAX_INPUT_CHARS,
};
pub use error::ClassifierError;
pub use summary::{summarize, SentimentCategory, SentimentSummary};
