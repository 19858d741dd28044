use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope returned by every handler.
///
/// Mirrors the error body shape (`status`, `message`, `data`) so clients can
/// branch on `status` without inspecting the HTTP layer.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: None,
            data: Some(data),
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// A 200 envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Error body shared by every failing response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Canonical reason phrase for the status.
    pub error: String,
    /// Human readable explanation safe to show to the client.
    pub message: String,
    /// Offending fields, present on validation failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<FieldErrorDto>>,
}

impl ErrorDto {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldErrorDto>) -> Self {
        self.data = Some(fields);
        self
    }
}

/// A single failed field rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FieldErrorDto {
    /// Where the field was read from: `body`, `query` or `params`.
    pub location: String,
    pub field: String,
    pub message: String,
}
