//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port, body-size cap)
//! - Check the secret decodes as base64
//!
//! # Design Decisions
//! - All-or-nothing: the first violated constraint rejects the whole config
//! - Fixed check order: port, max size, algorithm, secret presence, secret
//!   encoding
//! - Pure function: AppConfig → Result, no state

use crate::config::loader::ConfigError;
use crate::config::schema::AppConfig;
use crate::crypto::codec;

/// Validate every field of a freshly parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.listen_port < 0 {
        return Err(ConfigError::Invalid("listenPort cannot be negative".into()));
    }
    if config.max_msg_size_bytes <= 0 {
        return Err(ConfigError::Invalid(
            "maxMsgSizeBytes must greater than zero".into(),
        ));
    }
    if config.hmac_alg.trim().is_empty() {
        return Err(ConfigError::Invalid("hmacAlg must not be empty".into()));
    }
    if config.secret.trim().is_empty() {
        return Err(ConfigError::Invalid("secret must not be empty".into()));
    }
    if !codec::is_valid(config.secret.as_bytes()) {
        return Err(ConfigError::Invalid(
            "secret must be a valid base64 encoded string".into(),
        ));
    }
    Ok(())
}
