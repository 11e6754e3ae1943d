//! Loading a trained model from its serialized artifact.
//!
//! The JSON artifact holds the fitted weights and the ordered class-name list:
//!
//! ```json
//! {
//!   "coefficients": [[-0.42, 0.97, -2.52, -1.08], ...],
//!   "intercepts": [9.85, ...],
//!   "class_names": ["setosa", "versicolor", "virginica"]
//! }
//! ```

use super::classifier::{Classifier, LinearClassifier};
use super::error::LoadError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// A classifier together with the label of every class index it can produce.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub class_names: Arc<[String]>,
}

impl LoadedModel {
    /// Pairs a classifier with its labels. There must be exactly one label per class.
    pub fn new(classifier: Arc<dyn Classifier>, class_names: Vec<String>) -> Result<Self, LoadError> {
        if class_names.len() != classifier.n_classes() {
            return Err(LoadError::Inconsistent(format!(
                "{} class names for {} classes",
                class_names.len(),
                classifier.n_classes()
            )));
        }
        Ok(Self {
            classifier,
            class_names: class_names.into(),
        })
    }
}

/// The serialized form of a fitted linear model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    pub class_names: Vec<String>,
}

impl ModelArtifact {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that every part of the artifact agrees on the shape of the model.
    pub fn into_model(self) -> Result<LoadedModel, LoadError> {
        let classifier = LinearClassifier::new(self.coefficients, self.intercepts)?;
        LoadedModel::new(Arc::new(classifier), self.class_names)
    }
}

/// Reads a model from wherever it is stored.
#[async_trait]
pub trait ArtifactLoader: Send + Sync {
    /// Human-readable location, for logs.
    fn source(&self) -> String;

    async fn load(&self) -> Result<LoadedModel, LoadError>;
}

/// Loads a [`ModelArtifact`] from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonArtifactLoader {
    path: PathBuf,
}

impl JsonArtifactLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArtifactLoader for JsonArtifactLoader {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<LoadedModel, LoadError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = json.len(), "Read model artifact");
        ModelArtifact::from_json(&json)?.into_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_with_matching_shapes_loads() {
        let model = ModelArtifact::from_json(
            r#"{"coefficients": [[1.0], [2.0]], "intercepts": [0.0, 0.0], "class_names": ["a", "b"]}"#,
        )
        .unwrap()
        .into_model()
        .unwrap();
        assert_eq!(model.classifier.n_classes(), 2);
        assert_eq!(&*model.class_names, ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn class_name_count_must_match_classes() {
        let err = ModelArtifact::from_json(
            r#"{"coefficients": [[1.0], [2.0]], "intercepts": [0.0, 0.0], "class_names": ["a"]}"#,
        )
        .unwrap()
        .into_model()
        .unwrap_err();
        assert!(matches!(err, LoadError::Inconsistent(msg) if msg == "1 class names for 2 classes"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ModelArtifact::from_json("{\"coefficients\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let loader = JsonArtifactLoader::new("does/not/exist.json");
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[tokio::test]
    async fn bundled_iris_artifact_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/models/iris_model.json");
        let model = JsonArtifactLoader::new(path).load().await.unwrap();
        assert_eq!(model.classifier.n_features(), 4);
        assert_eq!(model.class_names.len(), 3);
    }
}
