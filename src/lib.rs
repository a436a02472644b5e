//! HMAC Signing Service Library

pub mod config;
pub mod crypto;
pub mod http;
pub mod routing;

pub use config::schema::AppConfig;
pub use crypto::HmacEngine;
pub use http::HttpServer;
