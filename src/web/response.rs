//! JSON responses and API errors

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Body could not be decoded into an item payload (400)
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Referenced item does not exist (404)
    #[error("Item not found")]
    NotFound,

    /// Response body could not be encoded (500)
    #[error("Failed to marshal JSON response")]
    Serialization(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Serialization(ref cause) = self {
            error!("Failed to serialize response: {}", cause);
        }

        let status = self.status_code();
        // Encoding a single string field cannot fail.
        let body = serde_json::to_vec(&ErrorBody {
            error: self.to_string(),
        })
        .unwrap_or_default();

        with_json_header(status, body)
    }
}

/// A serialized JSON response with an explicit status
#[derive(Debug)]
pub struct JsonResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl JsonResponse {
    /// Serialize `payload`, failing with [`ApiError::Serialization`]
    pub fn new<T: Serialize>(status: StatusCode, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(JsonResponse { status, body })
    }

    pub fn ok<T: Serialize>(payload: &T) -> ApiResult<Self> {
        Self::new(StatusCode::OK, payload)
    }

    pub fn created<T: Serialize>(payload: &T) -> ApiResult<Self> {
        Self::new(StatusCode::CREATED, payload)
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        with_json_header(self.status, self.body)
    }
}

fn with_json_header(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
