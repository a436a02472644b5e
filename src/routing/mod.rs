//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method, headers)
//!     → table.rs (exact-path lookup over the fixed table)
//!     → validation.rs (method, then Content-Type presence, then media type)
//!     → Return: validated Route or a typed request error
//! ```
//!
//! # Design Decisions
//! - Two routes, declared once as const data, never mutated
//! - Validation order is part of the contract (405 before 400 before 415)
//! - Deterministic: same input always resolves the same route

pub mod table;
pub mod validation;

pub use table::{Endpoint, Route, RouteTable};
pub use validation::validate_request;
