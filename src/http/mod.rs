//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, route registration, shared state)
//!     → pipeline.rs (validate, bounded read, decode, dispatch, encode)
//!     → dto.rs (wire types + per-endpoint field validation)
//!     → error.rs (status mapping for every failure path)
//! ```

pub mod dto;
pub mod error;
pub mod pipeline;
pub mod server;

pub use error::RequestError;
pub use server::{AppState, HttpServer};
