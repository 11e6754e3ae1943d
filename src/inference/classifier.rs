//! Classifiers the adapter can host.

use super::error::{ClassifierError, LoadError};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A trained model that maps one feature vector to a class index.
pub trait Classifier: Send + Sync + Debug {
    fn n_features(&self) -> usize;

    fn n_classes(&self) -> usize;

    /// Predicts the class index for a single sample.
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError>;
}

/// Multinomial linear classifier, the inference half of a fitted logistic regression.
///
/// Each class `k` has a coefficient row `w_k` and an intercept `b_k`; the predicted class is
/// `argmax_k (w_k · x + b_k)`. Softmax is monotonic, so the argmax of the raw scores is the
/// argmax of the class probabilities. Ties go to the lowest index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// One row per class, one column per feature.
    coefficients: Vec<Vec<f64>>,
    /// One intercept per class.
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Builds a classifier, rejecting ragged or mismatched weights.
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, LoadError> {
        let Some(first) = coefficients.first() else {
            return Err(LoadError::Inconsistent("no coefficient rows".into()));
        };
        let n_features = first.len();
        if n_features == 0 {
            return Err(LoadError::Inconsistent("coefficient rows are empty".into()));
        }
        if let Some(row) = coefficients.iter().position(|row| row.len() != n_features) {
            return Err(LoadError::Inconsistent(format!(
                "coefficient row {row} has {} values, expected {n_features}",
                coefficients[row].len()
            )));
        }
        if intercepts.len() != coefficients.len() {
            return Err(LoadError::Inconsistent(format!(
                "{} intercepts for {} classes",
                intercepts.len(),
                coefficients.len()
            )));
        }
        let weights_finite = coefficients.iter().flatten().chain(&intercepts).all(|w| w.is_finite());
        if !weights_finite {
            return Err(LoadError::Inconsistent("weights must be finite".into()));
        }
        Ok(Self {
            coefficients,
            intercepts,
        })
    }

    /// Raw class scores `w_k · x + b_k`.
    pub fn scores(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if features.len() != self.n_features() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }
        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect())
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        let scores = self.scores(features)?;
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ClassifierError::NonFiniteScore);
        }
        let mut best = 0;
        for (class, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = class;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class() -> LinearClassifier {
        LinearClassifier::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![0.0, 0.0]).unwrap()
    }

    #[test]
    fn predicts_the_highest_score() {
        let model = two_class();
        assert_eq!(model.predict(&[2.0, 1.0]), Ok(0));
        assert_eq!(model.predict(&[1.0, 2.0]), Ok(1));
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        assert_eq!(two_class().predict(&[1.0, 1.0]), Ok(0));
    }

    #[test]
    fn wrong_feature_count_is_a_shape_mismatch() {
        assert_eq!(
            two_class().predict(&[1.0, 2.0, 3.0]),
            Err(ClassifierError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn overflowing_scores_are_rejected() {
        let huge = LinearClassifier::new(vec![vec![f64::MAX], vec![1.0]], vec![0.0, 0.0]).unwrap();
        assert_eq!(huge.predict(&[10.0]), Err(ClassifierError::NonFiniteScore));
    }

    #[test]
    fn ragged_weights_are_rejected() {
        let err = LinearClassifier::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, LoadError::Inconsistent(_)));

        let err = LinearClassifier::new(vec![vec![1.0]], vec![0.0, 1.0]).unwrap_err();
        assert!(err.to_string().contains("2 intercepts for 1 classes"));

        assert!(LinearClassifier::new(vec![], vec![]).is_err());
    }
}
