use crate::application::shared::beer_errors::BeerServiceError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::error;

pub const INVALID_FIELDS_MESSAGE: &str = "One or more fields are invalid!";

/// Error payload returned by every failing beer route.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// When the error was produced, RFC 3339 in UTC.
    pub timestamp: String,
    /// The HTTP status code for this occurrence.
    pub status: u16,
    /// A human-readable explanation of what went wrong.
    pub message: String,
    /// Field-level violations, one `"<field>: <reason>"` entry each.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Build an error response with the shared payload shape.
pub fn api_error(status: StatusCode, message: impl Into<String>, errors: Option<Vec<String>>) -> Response {
    let payload = ApiError {
        timestamp: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
        status: status.as_u16(),
        message: message.into(),
        errors,
    };

    (status, Json(payload)).into_response()
}

/// 400 listing every field that failed validation.
pub fn validation_failed(errors: Vec<String>) -> Response {
    api_error(StatusCode::BAD_REQUEST, INVALID_FIELDS_MESSAGE, Some(errors))
}

/// 400 for a body that could not be parsed, including unknown `type` values.
pub fn malformed_body(rejection: JsonRejection) -> Response {
    api_error(StatusCode::BAD_REQUEST, rejection.body_text(), None)
}

/// Map a use case failure to its HTTP status and payload.
pub fn service_error(err: BeerServiceError) -> Response {
    let status = match &err {
        BeerServiceError::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
        BeerServiceError::StockExceeded(_) => StatusCode::BAD_REQUEST,
        BeerServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        BeerServiceError::Contended { .. } => StatusCode::CONFLICT,
        BeerServiceError::Storage(detail) => {
            error!(detail = %detail, "beer_storage_failure");
            return api_error(StatusCode::SERVICE_UNAVAILABLE, "storage unavailable", None);
        }
    };

    api_error(status, err.to_string(), None)
}
