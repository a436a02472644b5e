//! Keyed-hash signing engine.
//!
//! # Responsibilities
//! - Hold decoded key material and the configured algorithm
//! - Compute HMAC signatures over message bytes
//! - Verify claimed signatures in constant time
//!
//! # Design Decisions
//! - One-way lifecycle: uninitialized → initialized, never back; a second
//!   `init` is an error
//! - Signature comparison uses `subtle::ConstantTimeEq`, never `==`, so
//!   timing does not leak the position of the first mismatching byte
//! - Algorithm and key come from operator configuration; their failures
//!   are internal errors, not request errors

use hmac::{Hmac, Mac};
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::crypto::codec;

type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Errors raised by the signing engine. All map to HTTP 500: the algorithm
/// and key are operator-controlled configuration, not request data.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("HMAC algorithm not found: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("signing engine is already initialized")]
    AlreadyInitialized,

    #[error("signing engine is not initialized")]
    NotInitialized,
}

/// Supported hash functions for the HMAC construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HmacAlgorithm {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SHA224" => Some(Self::Sha224),
            "SHA256" => Some(Self::Sha256),
            "SHA384" => Some(Self::Sha384),
            "SHA512" => Some(Self::Sha512),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct EngineState {
    key: Vec<u8>,
    algorithm: HmacAlgorithm,
    mac_name: String,
}

/// HMAC signing engine. Created uninitialized; `init` installs key material
/// exactly once, after which `sign`/`verify` are pure functions safe for
/// unlimited concurrent use through a shared reference.
#[derive(Debug, Default)]
pub struct HmacEngine {
    state: Option<EngineState>,
}

impl HmacEngine {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Decode the base64 secret into raw key bytes and resolve the algorithm.
    /// Errors if called a second time.
    pub fn init(&mut self, secret_base64: &str, algorithm: &str) -> Result<(), CryptoError> {
        if self.state.is_some() {
            return Err(CryptoError::AlreadyInitialized);
        }
        let resolved = HmacAlgorithm::from_name(algorithm)
            .ok_or_else(|| CryptoError::UnknownAlgorithm(algorithm.to_string()))?;
        let key = codec::decode(secret_base64.as_bytes())
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        self.state = Some(EngineState {
            key,
            algorithm: resolved,
            mac_name: format!("Hmac{}", algorithm.to_ascii_uppercase()),
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Full algorithm identifier, e.g. "HmacSHA256". `None` until initialized.
    pub fn mac_name(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.mac_name.as_str())
    }

    /// Compute the signature over the UTF-8 bytes of `message`, returned as
    /// a URL-safe base64 string.
    pub fn sign(&self, message: &str) -> Result<String, CryptoError> {
        Ok(codec::encode(&self.compute(message)?))
    }

    /// Recompute the signature for `message` and compare it against
    /// `claimed_signature` in constant time.
    pub fn verify(&self, message: &str, claimed_signature: &str) -> Result<bool, CryptoError> {
        let expected = self.sign(message)?;
        Ok(expected
            .as_bytes()
            .ct_eq(claimed_signature.as_bytes())
            .into())
    }

    fn compute(&self, message: &str) -> Result<Vec<u8>, CryptoError> {
        let state = self.state.as_ref().ok_or(CryptoError::NotInitialized)?;
        let msg = message.as_bytes();
        let digest = match state.algorithm {
            HmacAlgorithm::Sha224 => {
                let mut mac = HmacSha224::new_from_slice(&state.key)
                    .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
                mac.update(msg);
                mac.finalize().into_bytes().to_vec()
            }
            HmacAlgorithm::Sha256 => {
                let mut mac = HmacSha256::new_from_slice(&state.key)
                    .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
                mac.update(msg);
                mac.finalize().into_bytes().to_vec()
            }
            HmacAlgorithm::Sha384 => {
                let mut mac = HmacSha384::new_from_slice(&state.key)
                    .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
                mac.update(msg);
                mac.finalize().into_bytes().to_vec()
            }
            HmacAlgorithm::Sha512 => {
                let mut mac = HmacSha512::new_from_slice(&state.key)
                    .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
                mac.update(msg);
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(digest)
    }
}
