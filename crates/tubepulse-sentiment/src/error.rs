use thiserror::Error;

/// Errors returned by a [`crate::TextClassifier`] for a single input.
///
/// The bundled lexicon model never fails, but the trait keeps the error
/// channel so model-backed implementations can report per-item failures
/// without aborting a whole batch.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The classifier backend rejected or failed on this input.
    #[error("classifier backend error: {0}")]
    Backend(String),
}
