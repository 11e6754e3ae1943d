//! # Inference Adapter
//!
//! Wraps a pre-trained iris classifier behind a small, explicit lifecycle:
//!
//! ```text
//! UNINITIALIZED ──initialize──▶ LOADING ──▶ READY
//!                                      └──▶ FAILED(reason)
//! ```
//!
//! The transition happens once, at startup. There is no retry and no reload: a failed load
//! leaves the adapter answering every prediction with [`PredictError::Unavailable`], without
//! touching the classifier.
//!
//! ## Structure
//!
//! - [`classifier`] - the [`Classifier`] seam and the [`LinearClassifier`] used for iris
//! - [`loader`] - [`ArtifactLoader`] and the JSON artifact format
//! - [`adapter`] - [`InferenceAdapter`], the state machine callers talk to
//! - [`error`] - [`LoadError`], [`PredictError`], [`ClassifierError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crud_recipe::inference::{InferenceAdapter, JsonArtifactLoader};
//! use crud_recipe::model::IrisFeatures;
//!
//! # async fn run() {
//! let loader = JsonArtifactLoader::new("models/iris_model.json");
//! let adapter = InferenceAdapter::load(&loader).await;
//!
//! if adapter.is_ready() {
//!     let prediction = adapter.predict(&IrisFeatures::new(4.9, 3.0, 1.4, 0.2));
//!     println!("{prediction:?}");
//! }
//! # }
//! ```

pub mod adapter;
pub mod classifier;
pub mod error;
pub mod loader;

pub use adapter::*;
pub use classifier::*;
pub use error::*;
pub use loader::*;
