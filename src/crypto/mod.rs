//! Cryptography subsystem.
//!
//! # Data Flow
//! ```text
//! Config (base64 secret, algorithm name)
//!     → engine.rs (decode key, resolve algorithm, freeze)
//!
//! Request (message [, claimed signature])
//!     → engine.rs (HMAC over UTF-8 bytes)
//!     → codec.rs (URL-safe base64 encode)
//!     → signature string / constant-time comparison result
//! ```
//!
//! # Design Decisions
//! - Engine is write-once: initialized from config at startup, read-only after
//! - Constant-time comparison is a dedicated primitive (`subtle`), never `==`
//! - Algorithm/key failures are internal errors (500), not request errors

pub mod codec;
pub mod engine;

pub use engine::{CryptoError, HmacAlgorithm, HmacEngine};
