//! Request and response shapes of the iris prediction endpoint.

use crate::validation::{finite, Patch, ValidationError, Violations};
use serde::{Deserialize, Serialize};

/// The four measurements (in centimetres) the iris classifier expects, in model input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrisFeatures {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl IrisFeatures {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// The feature vector in the order the model was trained on.
    pub fn to_vector(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

/// Raw prediction payload. All four fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IrisFeaturesDraft {
    #[serde(default)]
    pub sepal_length: Patch<f64>,
    #[serde(default)]
    pub sepal_width: Patch<f64>,
    #[serde(default)]
    pub petal_length: Patch<f64>,
    #[serde(default)]
    pub petal_width: Patch<f64>,
}

impl IrisFeaturesDraft {
    pub fn validate(self) -> Result<IrisFeatures, ValidationError> {
        let mut violations = Violations::new();
        let mut field = |name, value: Patch<f64>| {
            violations.check(name, value.required().and_then(finite))
        };
        let sepal_length = field("sepal_length", self.sepal_length);
        let sepal_width = field("sepal_width", self.sepal_width);
        let petal_length = field("petal_length", self.petal_length);
        let petal_width = field("petal_width", self.petal_width);

        match (sepal_length, sepal_width, petal_length, petal_width) {
            (Some(sl), Some(sw), Some(pl), Some(pw)) if violations.is_empty() => {
                Ok(IrisFeatures::new(sl, sw, pl, pw))
            }
            _ => Err(violations.into_error()),
        }
    }
}

/// The predicted class index and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub prediction: usize,
    pub class_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_features_are_required() {
        let draft: IrisFeaturesDraft =
            serde_json::from_str(r#"{"sepal_length": 5.1, "petal_width": 0.2}"#).unwrap();
        let err = draft.validate().unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, ["sepal_width", "petal_length"]);
    }

    #[test]
    fn vector_follows_training_order() {
        let draft: IrisFeaturesDraft = serde_json::from_str(
            r#"{"petal_width": 0.2, "petal_length": 1.4, "sepal_width": 3.0, "sepal_length": 4.9}"#,
        )
        .unwrap();
        assert_eq!(draft.validate().unwrap().to_vector(), [4.9, 3.0, 1.4, 0.2]);
    }
}
