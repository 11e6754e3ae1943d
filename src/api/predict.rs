//! Iris prediction endpoints.

use super::{decode, respond, ApiError, ApiResponse};
use crate::inference::{AdapterStatus, InferenceAdapter};
use crate::model::IrisFeaturesDraft;
use http::StatusCode;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `POST /predict`. Responds `{"prediction": index, "class_name": label}`.
#[instrument(skip_all)]
pub async fn predict(adapter: &InferenceAdapter, body: &[u8]) -> ApiResponse {
    respond(classify(adapter, body))
}

fn classify(adapter: &InferenceAdapter, body: &[u8]) -> Result<ApiResponse, ApiError> {
    let draft: IrisFeaturesDraft = decode(body)?;
    let features = draft.validate()?;
    let prediction = adapter.predict(&features)?;
    ApiResponse::ok(prediction)
}

/// `GET /health`. 200 with `{"status": "ready"}` once the model is loaded, 500 otherwise.
#[instrument(skip_all)]
pub async fn health(adapter: &InferenceAdapter) -> ApiResponse {
    let status = adapter.status();
    let code = if status == AdapterStatus::Ready {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let reason = match &status {
        AdapterStatus::Failed(reason) => Some(reason.clone()),
        _ => None,
    };
    respond(ApiResponse::with_status(
        code,
        HealthResponse {
            status: status.to_string(),
            reason,
        },
    ))
}
