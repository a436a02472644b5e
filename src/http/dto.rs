//! Request/response wire types and per-endpoint field validation.
//!
//! # Design Decisions
//! - Request fields are `Option`: a missing JSON field is a validation error
//!   with a specific message, not a decode failure
//! - `VerifyResponse.ok` is the string "true"/"false", preserved for wire
//!   compatibility with existing clients
//! - Signature validity here means base64 decodability, nothing semantic

use serde::{Deserialize, Serialize};

use crate::crypto::codec;
use crate::http::error::RequestError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SignRequest {
    pub msg: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerifyRequest {
    pub msg: Option<String>,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyResponse {
    pub ok: String,
}

impl VerifyResponse {
    pub fn from_bool(ok: bool) -> Self {
        Self { ok: ok.to_string() }
    }
}

impl SignRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        match &self.msg {
            Some(msg) if !msg.trim().is_empty() => Ok(()),
            _ => Err(RequestError::Validation("msg field cannot be empty".into())),
        }
    }
}

impl VerifyRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        let (Some(_), Some(signature)) = (&self.msg, &self.signature) else {
            return Err(RequestError::Validation(
                "msg or signature field is missing or null".into(),
            ));
        };
        if !codec::is_valid(signature.as_bytes()) {
            return Err(RequestError::Validation(
                "signature is not a valid base64 encoded string".into(),
            ));
        }
        Ok(())
    }
}
