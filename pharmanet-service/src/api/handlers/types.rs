//! Response envelopes shared by every operation.
//!
//! Success: `{message, result}`. Failure: `{message, error: {kind, cause}}`.
//! Callers branch on `error.kind`, never on free-text messages, and no bare
//! error object ever crosses the boundary.

use crate::api::state::GatewayState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use pharmanet_core::foundation::{ErrorKind, GatewayError};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub message: String,
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct FailureEnvelope {
    pub message: String,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub cause: String,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Estimation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Submission => StatusCode::BAD_GATEWAY,
        ErrorKind::Readback => StatusCode::BAD_GATEWAY,
        ErrorKind::Decode => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Parse a request body into its typed payload. A malformed body is a
/// `ValidationError` and never reaches any remote call.
pub fn parse_request<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|err| GatewayError::validation("body", err.to_string()))
}

pub fn respond<T: Serialize>(
    state: &GatewayState,
    endpoint: &'static str,
    ok_message: &str,
    err_message: &str,
    outcome: Result<T, GatewayError>,
) -> Response {
    match outcome {
        Ok(result) => {
            state.metrics.inc_request(endpoint, "ok");
            (StatusCode::OK, Json(SuccessEnvelope { message: ok_message.to_string(), result })).into_response()
        }
        Err(err) => {
            let kind = err.kind();
            state.metrics.inc_request(endpoint, "error");
            state.metrics.inc_failure(endpoint, kind.as_str());
            warn!("{} failed kind={} error={}", endpoint, kind.as_str(), err);
            (
                status_for(kind),
                Json(FailureEnvelope {
                    message: err_message.to_string(),
                    error: ErrorBody { kind: kind.as_str(), cause: err.to_string() },
                }),
            )
                .into_response()
        }
    }
}
