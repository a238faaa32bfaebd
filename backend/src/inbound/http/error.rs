//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while every handler
//! failure turns into the same JSON envelope:
//!
//! ```json
//! {"success": false, "error": 404, "Message": "Not Found"}
//! ```
//!
//! The public message is fixed per status. The domain message stays in the
//! logs, correlated through the `Trace-Id` header.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Fixed human-readable text for the status.
    #[serde(rename = "Message")]
    #[schema(example = "Not Found")]
    pub message: String,
}

impl ErrorEnvelope {
    fn for_code(code: ErrorCode) -> Self {
        Self {
            success: false,
            error: status_for(code).as_u16(),
            message: public_message(code).to_owned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "Bad Request",
        ErrorCode::NotFound => "Not Found",
        ErrorCode::MethodNotAllowed => "Method is Not allowed for requested URL",
        ErrorCode::Unprocessable => "Unprocessable entity",
        ErrorCode::InternalError => "Server Error",
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = self.trace_id().unwrap_or("-");
        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                trace_id,
                message = self.message(),
                details = ?self.details(),
                "request failed"
            );
        } else {
            warn!(
                status = status.as_u16(),
                trace_id,
                message = self.message(),
                details = ?self.details(),
                "request rejected"
            );
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::for_code(self.code()))
    }
}

#[cfg(test)]
mod tests;
