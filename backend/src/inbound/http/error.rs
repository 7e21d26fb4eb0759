//! HTTP error envelope and mapping from domain errors.
//!
//! Every failure body has the shape
//! `{"success": false, "error": <status>, "message": <text>}`, with the
//! request trace identifier echoed in the `Trace-Id` header. The domain
//! stays free of transport concerns; this module owns the translation.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{DomainError, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Serialized form of the error envelope, kept for OpenAPI documentation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false` on failures.
    #[schema(example = false)]
    pub success: bool,
    /// The HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Human-readable description of the failure.
    #[schema(example = "The server can not find the requested resource.")]
    pub message: String,
}

/// Transport-level error rendered as the JSON envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

/// Canned description for each status the envelope can carry.
///
/// Codes 405, 410, and 505 are declared for completeness; nothing in this
/// system raises them itself.
fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => {
            "The request could not be understood by the server due to incorrect syntax."
        }
        StatusCode::NOT_FOUND => "The server can not find the requested resource.",
        StatusCode::METHOD_NOT_ALLOWED => {
            "The request HTTP method is known by the server but cannot be used for that resource."
        }
        StatusCode::GONE => "The requested resource is no longer available at the server.",
        StatusCode::UNPROCESSABLE_ENTITY => {
            "The server understands the request but is unable to process it."
        }
        StatusCode::HTTP_VERSION_NOT_SUPPORTED => {
            "The HTTP version used in the request is not supported by the server."
        }
        _ => "The server encountered an unexpected condition which prevented it from fulfilling the request.",
    }
}

impl ApiError {
    /// An error for `status` using its canned message.
    #[must_use]
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            status,
            message: status_message(status).to_owned(),
        }
    }

    /// A 400 error with a caller-supplied message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// The status code this error renders with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The message carried in the envelope body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            success: false,
            error: self.status.as_u16(),
            message: self.message.clone(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let status = match error.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: error.message().to_owned(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            // Internal fault details stay in the logs, not the response.
            error!(message = %self.message, "internal server error");
            let redacted = Self::for_status(StatusCode::INTERNAL_SERVER_ERROR);
            return builder.json(redacted.envelope());
        }
        builder.json(self.envelope())
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
