//! Per-request orchestration.
//!
//! # Responsibilities
//! - Route resolve + method/media-type validation
//! - Bounded body read and size checks
//! - JSON decode, endpoint field validation, business call, JSON encode
//! - Uniform error translation at a single boundary
//!
//! # Design Decisions
//! - Body read is capped at max + 1 bytes: one byte over the limit is enough
//!   to detect overflow without an unbounded read
//! - Every step is a hard gate; the first failure short-circuits via `?` and
//!   renders as a plain-text error response

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::dto::{SignRequest, SignResponse, VerifyRequest, VerifyResponse};
use crate::http::error::RequestError;
use crate::http::server::AppState;
use crate::routing::table::Endpoint;
use crate::routing::validation::validate_request;

/// Single dispatch handler behind every registered route.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match handle(&state, request).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn handle(state: &AppState, request: Request<Body>) -> Result<Response, RequestError> {
    let path = request.uri().path().to_string();
    let Some(route) = state.routes.resolve(&path) else {
        // Registered paths always resolve; this guards a desync between the
        // axum router and the table.
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    validate_request(route, request.method(), request.headers())?;

    tracing::debug!(path = %path, "Started processing request");
    let body = read_body(request.into_body(), state.max_body_bytes).await?;

    let response = match route.endpoint {
        Endpoint::Sign => {
            let request: SignRequest = decode(&body)?;
            request.validate()?;
            let msg = request.msg.unwrap_or_default();
            let signature = state.engine.sign(&msg)?;
            encode(&SignResponse { signature })?
        }
        Endpoint::Verify => {
            let request: VerifyRequest = decode(&body)?;
            request.validate()?;
            let msg = request.msg.unwrap_or_default();
            let signature = request.signature.unwrap_or_default();
            let ok = state.engine.verify(&msg, &signature)?;
            encode(&VerifyResponse::from_bool(ok))?
        }
    };
    tracing::debug!(path = %path, "Finished processing request");
    Ok(response)
}

/// Read at most `max + 1` bytes, then apply the size gates: empty is a bad
/// request, anything over `max` is payload-too-large.
async fn read_body(body: Body, max: usize) -> Result<Bytes, RequestError> {
    let bytes = axum::body::to_bytes(body, max + 1)
        .await
        .map_err(|_| RequestError::PayloadTooLarge(max))?;
    if bytes.is_empty() {
        return Err(RequestError::EmptyBody);
    }
    if bytes.len() > max {
        return Err(RequestError::PayloadTooLarge(max));
    }
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice(body).map_err(|e| RequestError::Deserialization(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<Response, RequestError> {
    let json = serde_json::to_vec(value).map_err(|e| RequestError::Internal(e.to_string()))?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response())
}
