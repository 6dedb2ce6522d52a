//! Error-to-response mapping.
//!
//! The original service collapsed every failure to HTTP 500; here the
//! error kind picks the status while the body stays `{"error": <message>}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dairysense_core::AnalyticsError;

pub fn analytics_error_to_response(err: AnalyticsError) -> axum::response::Response {
    let status = match &err {
        AnalyticsError::Validation(_) => StatusCode::BAD_REQUEST,
        AnalyticsError::DataAccess(_) | AnalyticsError::Computation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    tracing::warn!(error = %err, "request failed");
    json_error(status, err.to_string())
}

/// Map a body-extraction rejection into the same wire shape as every other
/// failure (missing field, wrong type, unparseable JSON all count as
/// validation errors).
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    analytics_error_to_response(AnalyticsError::validation(rejection.body_text()))
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
