//! Request error taxonomy and HTTP status mapping.
//!
//! # Responsibilities
//! - One variant per recoverable request failure, mapped 1:1 to a status
//! - Render errors as plain-text responses with the error message as body
//! - Log at the mapping boundary (client errors at info, server errors at
//!   error)
//!
//! # Design Decisions
//! - Validation errors surface as soon as detected and are never retried
//! - JSON decode failures map to 500: malformed JSON past the size checks is
//!   an internal boundary condition here, not user input
//! - Crypto failures map to 500: algorithm and key are operator-controlled

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::crypto::CryptoError;

/// Errors recovered at the pipeline boundary. The server keeps serving
/// other requests after any of these.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Http method {0} is not supported")]
    MethodNotSupported(String),

    #[error("Required header Content-Type is missing")]
    MissingContentType,

    #[error("Request contains unsupported media types. Supported types are {0}")]
    UnsupportedMediaType(String),

    #[error("Request body is empty")]
    EmptyBody,

    #[error("Request body size exceeds max {0} bytes")]
    PayloadTooLarge(usize),

    #[error("{0}")]
    Validation(String),

    #[error("Error while parsing json: {0}")]
    Deserialization(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("{0}")]
    Internal(String),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MethodNotSupported(_) => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::MissingContentType
            | RequestError::EmptyBody
            | RequestError::Validation(_) => StatusCode::BAD_REQUEST,
            RequestError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RequestError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::Deserialization(_)
            | RequestError::Crypto(_)
            | RequestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(status = %status, message = %message, "Request failed");
        } else {
            tracing::info!(status = %status, message = %message, "Request rejected");
        }
        (status, message).into_response()
    }
}
