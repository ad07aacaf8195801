//! Error Conversion
//!
//! Converts `ApiError` into HTTP responses. All errors become a JSON body of
//! the form `{"error": <message>, "status": <code>}`. Two cases carry extra
//! signal:
//!
//! - 401 responses include a `WWW-Authenticate: Bearer` header so clients
//!   know which scheme to retry with
//! - 403 responses include a `"reason"` field with the guard's machine tag
//!   (`role_insufficient` or `not_owner`)

use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server faults get logged with full detail before the generic
        // message goes out; client errors only rate a warn.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "request failed with server error");
        } else {
            tracing::warn!(status = %status, error = %self, "request rejected");
        }

        let mut body = json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        if let ApiError::Forbidden { reason, .. } = &self {
            body["reason"] = json!(reason.as_tag());
        }

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
