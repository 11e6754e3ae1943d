//! # Endpoint Functions
//!
//! One async function per route, independent of any web framework. A router maps a verb and a
//! path to one of these, passes the raw body bytes and query values, and writes the returned
//! [`ApiResponse`] back to the wire.
//!
//! | Route | Function |
//! |-------|----------|
//! | `POST /todos` | [`todos::create`] |
//! | `GET /todos/{id}` | [`todos::get_one`] |
//! | `GET /todos?first_n=N` | [`todos::get_many`] |
//! | `PUT /todos/{id}` | [`todos::replace`] |
//! | `PATCH /todos/{id}` | [`todos::merge`] |
//! | `DELETE /todos/{id}` | [`todos::delete`] |
//! | `POST /items` | [`items::create`] |
//! | `GET /items?limit=N` | [`items::list`] |
//! | `GET /items/{id}` | [`items::get_one`] |
//! | `PUT /items/{id}` | [`items::replace`] |
//! | `PATCH /items/{id}` | [`items::merge`] |
//! | `DELETE /items/{id}` | [`items::delete`] |
//! | `GET /search?name=S` | [`items::search`] |
//! | `GET /total` | [`items::total`] |
//! | `GET /stats` | [`items::stats`] |
//! | `DELETE /clear` | [`items::clear`] |
//! | `POST /predict` | [`predict::predict`] |
//! | `GET /health` | [`predict::health`] |
//!
//! Failures never escape as Rust errors: each one is translated into a status code and an
//! [`ErrorBody`] carrying a human-readable `detail`.

pub mod items;
pub mod predict;
pub mod todos;

use crate::inference::PredictError;
use crate::item_actor::ItemError;
use crate::todo_actor::TodoError;
use crate::validation::ValidationError;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

/// A status code and a JSON body, ready to be written by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: impl Serialize) -> Result<Self, ApiError> {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn created(body: impl Serialize) -> Result<Self, ApiError> {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: impl Serialize) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Internal(format!("failed to encode response: {e}")))?;
        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The serialized body.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.body.to_string().into_bytes()
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            error!(%status, error = %err, "Request failed");
        } else {
            debug!(%status, error = %err, "Request rejected");
        }
        let body = ErrorBody::from(&err);
        Self {
            status,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }
}

/// Collapses a handler result into the response the transport writes.
pub(crate) fn respond(result: Result<ApiResponse, ApiError>) -> ApiResponse {
    result.unwrap_or_else(ApiResponse::from)
}

/// Every failure an endpoint can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The body is not JSON, or a field has the wrong JSON type.
    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    /// The model is not loaded. Nothing was attempted.
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Model-unavailable is reported as a 500, like any other server-side failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::NotFound(_) => ApiError::NotFound("Todo not found".into()),
            TodoError::Validation(v) => ApiError::Validation(v),
            TodoError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(_) => ApiError::NotFound("Item not found".into()),
            ItemError::Validation(v) => ApiError::Validation(v),
            ItemError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::Unavailable => ApiError::ServiceUnavailable(e.to_string()),
            PredictError::Failed(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// The uniform error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    /// One entry per offending field, for validation failures only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let errors = match err {
            ApiError::Validation(v) => v
                .violations()
                .iter()
                .map(|fv| FieldError {
                    field: fv.field.to_string(),
                    message: fv.violation.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            detail: err.to_string(),
            errors,
        }
    }
}

/// Decodes a JSON request body.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDraft;
    use crate::validation::Violation;

    #[test]
    fn validation_errors_list_every_field() {
        let err = ApiError::from(ValidationError::single("price", Violation::Missing));
        let response = ApiResponse::from(err);

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.body,
            serde_json::json!({
                "detail": "validation failed: price: field required",
                "errors": [{"field": "price", "message": "field required"}]
            })
        );
    }

    #[test]
    fn not_found_has_only_a_detail() {
        let response = ApiResponse::from(ApiError::from(TodoError::NotFound("3".into())));
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, serde_json::json!({"detail": "Todo not found"}));
    }

    #[test]
    fn unavailable_model_is_a_server_error() {
        let err = ApiError::from(PredictError::Unavailable);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        let err = decode::<ItemDraft>(b"{name: ").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let wrong_type = decode::<ItemDraft>(br#"{"price": "cheap"}"#).unwrap_err();
        assert!(matches!(wrong_type, ApiError::BadRequest(_)));
    }

    #[test]
    fn bytes_are_the_json_body() {
        let response = ApiResponse::created(serde_json::json!({"id": 1})).unwrap();
        assert_eq!(response.to_bytes(), br#"{"id":1}"#.to_vec());
        assert!(response.is_success());
    }
}
