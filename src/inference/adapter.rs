//! The inference state machine.

use super::error::PredictError;
use super::loader::{ArtifactLoader, LoadedModel};
use crate::model::{IrisFeatures, Prediction};
use std::fmt;
use tracing::{error, info, warn};

/// Observable readiness of an [`InferenceAdapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterStatus {
    Uninitialized,
    Loading,
    Ready,
    /// Loading failed; the reason is kept for the health probe.
    Failed(String),
}

impl fmt::Display for AdapterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterStatus::Uninitialized => f.write_str("uninitialized"),
            AdapterStatus::Loading => f.write_str("loading"),
            AdapterStatus::Ready => f.write_str("ready"),
            AdapterStatus::Failed(_) => f.write_str("failed"),
        }
    }
}

#[derive(Debug)]
enum State {
    Uninitialized,
    Loading,
    Ready(LoadedModel),
    Failed(String),
}

/// Hosts one classifier and its class-name list.
///
/// Build it with [`InferenceAdapter::load`] at startup, then share it read-only (typically in an
/// `Arc`). A failed prediction never changes the adapter's state.
#[derive(Debug)]
pub struct InferenceAdapter {
    state: State,
}

impl Default for InferenceAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceAdapter {
    /// An adapter that has not attempted to load anything.
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Creates an adapter and runs its single load attempt.
    pub async fn load(loader: &dyn ArtifactLoader) -> Self {
        let mut adapter = Self::new();
        adapter.initialize(loader).await;
        adapter
    }

    /// Performs the one-time transition out of `Uninitialized`.
    ///
    /// Calling it again is a no-op that reports the current status: there is no retry and no
    /// reload.
    pub async fn initialize(&mut self, loader: &dyn ArtifactLoader) -> AdapterStatus {
        if !matches!(self.state, State::Uninitialized) {
            warn!(status = %self.status(), "Model already initialized, ignoring");
            return self.status();
        }

        let source = loader.source();
        self.state = State::Loading;
        info!(%source, "Loading model");

        self.state = match loader.load().await {
            Ok(model) => {
                info!(
                    %source,
                    classes = model.class_names.len(),
                    features = model.classifier.n_features(),
                    "Model ready"
                );
                State::Ready(model)
            }
            Err(e) => {
                error!(%source, error = %e, "Model unavailable");
                State::Failed(e.to_string())
            }
        };
        self.status()
    }

    pub fn status(&self) -> AdapterStatus {
        match &self.state {
            State::Uninitialized => AdapterStatus::Uninitialized,
            State::Loading => AdapterStatus::Loading,
            State::Ready(_) => AdapterStatus::Ready,
            State::Failed(reason) => AdapterStatus::Failed(reason.clone()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The class labels in index order, once ready.
    pub fn class_names(&self) -> Option<&[String]> {
        match &self.state {
            State::Ready(model) => Some(&model.class_names),
            _ => None,
        }
    }

    /// Classifies one sample.
    ///
    /// Returns [`PredictError::Unavailable`] without running the classifier unless the adapter is
    /// ready.
    pub fn predict(&self, features: &IrisFeatures) -> Result<Prediction, PredictError> {
        let State::Ready(model) = &self.state else {
            warn!(status = %self.status(), "Prediction requested but model is not loaded");
            return Err(PredictError::Unavailable);
        };

        let index = model.classifier.predict(&features.to_vector()).map_err(|e| {
            warn!(error = %e, "Prediction failed");
            PredictError::Failed(e.to_string())
        })?;

        let Some(class_name) = model.class_names.get(index) else {
            let reason = format!(
                "class index {index} is outside the {} known classes",
                model.class_names.len()
            );
            warn!(%reason, "Prediction failed");
            return Err(PredictError::Failed(reason));
        };

        Ok(Prediction {
            prediction: index,
            class_name: class_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{Classifier, ClassifierError, LoadError, ModelArtifact};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const IRIS: &str = include_str!("../../models/iris_model.json");

    struct StaticLoader(&'static str);

    #[async_trait]
    impl ArtifactLoader for StaticLoader {
        fn source(&self) -> String {
            "memory".into()
        }

        async fn load(&self) -> Result<LoadedModel, LoadError> {
            ModelArtifact::from_json(self.0)?.into_model()
        }
    }

    /// Always answers a fixed index and counts how often it was asked.
    #[derive(Debug, Default)]
    struct FixedClassifier {
        answer: usize,
        calls: AtomicUsize,
    }

    impl Classifier for FixedClassifier {
        fn n_features(&self) -> usize {
            4
        }

        fn n_classes(&self) -> usize {
            1
        }

        fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct FixedLoader(Arc<FixedClassifier>);

    #[async_trait]
    impl ArtifactLoader for FixedLoader {
        fn source(&self) -> String {
            "fixed".into()
        }

        async fn load(&self) -> Result<LoadedModel, LoadError> {
            LoadedModel::new(self.0.clone(), vec!["only".into()])
        }
    }

    #[tokio::test]
    async fn iris_samples_land_in_their_species() {
        let adapter = InferenceAdapter::load(&StaticLoader(IRIS)).await;
        assert_eq!(adapter.status(), AdapterStatus::Ready);

        let cases = [
            (IrisFeatures::new(4.9, 3.0, 1.4, 0.2), 0, "setosa"),
            (IrisFeatures::new(5.9, 3.0, 4.2, 1.5), 1, "versicolor"),
            (IrisFeatures::new(6.7, 3.0, 5.2, 2.3), 2, "virginica"),
        ];
        for (features, index, name) in cases {
            let prediction = adapter.predict(&features).unwrap();
            assert_eq!(prediction.prediction, index);
            assert_eq!(prediction.class_name, name);
        }
    }

    #[tokio::test]
    async fn failed_load_is_unavailable() {
        let adapter = InferenceAdapter::load(&StaticLoader("not json")).await;

        assert!(matches!(adapter.status(), AdapterStatus::Failed(reason) if reason.contains("parse")));
        assert_eq!(
            adapter.predict(&IrisFeatures::new(1.0, 1.0, 1.0, 1.0)),
            Err(PredictError::Unavailable)
        );
    }

    #[test]
    fn uninitialized_adapter_never_runs_inference() {
        let adapter = InferenceAdapter::new();
        assert_eq!(adapter.status(), AdapterStatus::Uninitialized);
        assert_eq!(
            adapter.predict(&IrisFeatures::new(1.0, 1.0, 1.0, 1.0)),
            Err(PredictError::Unavailable)
        );
        assert!(adapter.class_names().is_none());
    }

    #[tokio::test]
    async fn second_initialize_does_not_reload() {
        let classifier = Arc::new(FixedClassifier::default());
        let mut adapter = InferenceAdapter::load(&StaticLoader("broken")).await;

        let status = adapter.initialize(&FixedLoader(classifier.clone())).await;

        assert!(matches!(status, AdapterStatus::Failed(_)));
        assert!(!adapter.is_ready());
    }

    #[tokio::test]
    async fn index_without_label_fails_but_keeps_adapter_ready() {
        let classifier = Arc::new(FixedClassifier {
            answer: 5,
            calls: AtomicUsize::new(0),
        });
        let adapter = InferenceAdapter::load(&FixedLoader(classifier.clone())).await;

        let err = adapter
            .predict(&IrisFeatures::new(1.0, 1.0, 1.0, 1.0))
            .unwrap_err();

        assert!(matches!(err, PredictError::Failed(reason) if reason.contains("class index 5")));
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
        assert!(adapter.is_ready());
    }
}
