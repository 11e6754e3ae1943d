//! Error types for model loading and prediction.

use std::path::PathBuf;
use thiserror::Error;

/// Why a model artifact could not be turned into a ready classifier.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact parsed but its parts disagree (e.g. 3 coefficient rows, 2 class names).
    #[error("inconsistent model artifact: {0}")]
    Inconsistent(String),
}

/// Errors reported by [`InferenceAdapter::predict`](super::InferenceAdapter::predict).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictError {
    /// The model never reached the ready state. Inference was not attempted.
    #[error("Machine learning model is not loaded. Server might be misconfigured.")]
    Unavailable,

    /// The classifier ran and failed, or produced an index with no label.
    #[error("Prediction failed due to an internal error: {0}")]
    Failed(String),
}

/// Errors raised by a [`Classifier`](super::Classifier) while scoring one sample.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("class scores are not finite")]
    NonFiniteScore,
}
