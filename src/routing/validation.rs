//! Request-level route validation.
//!
//! # Responsibilities
//! - Check the method against the route's allowed set
//! - Require a Content-Type header
//! - Check every Content-Type value against the route's media types
//!
//! # Design Decisions
//! - Fixed order: method before media type; a bad method on a bad-media-type
//!   request reports 405, not 415
//! - Media-type comparison ignores parameters ("; charset=utf-8") and case

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};

use crate::http::error::RequestError;
use crate::routing::table::Route;

/// Validate method and content type for a resolved route.
pub fn validate_request(
    route: &Route,
    method: &Method,
    headers: &HeaderMap,
) -> Result<(), RequestError> {
    if !route.methods.contains(method) {
        return Err(RequestError::MethodNotSupported(method.to_string()));
    }

    let mut values = headers.get_all(CONTENT_TYPE).iter().peekable();
    if values.peek().is_none() {
        return Err(RequestError::MissingContentType);
    }
    for value in values {
        let supported = value
            .to_str()
            .map(|v| {
                let media_type = v.split(';').next().unwrap_or("").trim();
                route
                    .media_types
                    .iter()
                    .any(|allowed| media_type.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);
        if !supported {
            return Err(RequestError::UnsupportedMediaType(supported_types(route)));
        }
    }
    Ok(())
}

fn supported_types(route: &Route) -> String {
    format!("[{}]", route.media_types.join(", "))
}
