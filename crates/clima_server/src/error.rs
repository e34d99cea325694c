//! API error responses
//!
//! Every handler failure funnels through [`ApiError`], which maps to an
//! HTTP status plus a `{ error, message }` JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use clima_core::series::SeriesError;
use clima_core::types::TemperatureKind;
use clima_store::error::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Handler-level error, converted into an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    /// No stored series for the requested pair
    #[error("No data for city {city} with kind {kind}")]
    NoData {
        /// Requested city name
        city: String,
        /// Requested temperature kind
        kind: TemperatureKind,
    },

    /// The `kind` query parameter did not parse
    #[error("Unknown temperature kind: {0}")]
    InvalidKind(String),

    /// Storage backend failure
    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),

    /// Estimation failure
    #[error("Estimation failure: {0}")]
    Series(#[from] SeriesError),
}

/// JSON body sent with every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable machine-readable code
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ApiError {
    /// Status code and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NoData { .. } => (StatusCode::NOT_FOUND, "no_data"),
            ApiError::InvalidKind(_) => (StatusCode::BAD_REQUEST, "invalid_kind"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            ApiError::Series(_) => (StatusCode::INTERNAL_SERVER_ERROR, "estimation_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        }

        let body = ErrorBody {
            error: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
