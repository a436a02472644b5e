//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, fixed order)
//!     → store.rs (installed once for the process lifetime)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once installed; there is no reload path
//! - Validation is all-or-nothing and runs before the config is accepted
//! - Any failure here is startup-fatal, never a runtime error

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;

pub use loader::ConfigError;
pub use schema::AppConfig;
