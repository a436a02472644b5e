//! Configuration schema definitions.
//!
//! The complete configuration structure for the service. All types derive
//! Serde traits for deserialization from the JSON config file.

use serde::{Deserialize, Serialize};

/// Root configuration for the signing service.
///
/// Wire keys are camelCase: `hmacAlg`, `secret`, `listenPort`,
/// `maxMsgSizeBytes`. Missing fields take zero values and are caught by
/// semantic validation rather than by the parser.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Hash function for the HMAC construction (e.g. "SHA256").
    pub hmac_alg: String,

    /// Shared secret, base64-encoded.
    pub secret: String,

    /// TCP port to listen on. 0 lets the OS pick (used by tests).
    pub listen_port: i64,

    /// Upper bound on accepted request body size.
    pub max_msg_size_bytes: i64,
}

impl AppConfig {
    /// Body-size cap as a usize for the request pipeline.
    /// Validation guarantees the value is positive.
    pub fn max_body_bytes(&self) -> usize {
        self.max_msg_size_bytes.max(0) as usize
    }
}
