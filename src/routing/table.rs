//! Fixed route table.
//!
//! # Design Decisions
//! - Plain data: each route is a descriptor (path, methods, media types,
//!   endpoint), not a handler class
//! - Built once at startup, immutable at runtime (thread-safe without locks)
//! - Exact path match; unknown paths fall through to the framework 404

use axum::http::Method;

/// Business operation a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Sign,
    Verify,
}

/// Descriptor binding a path to its allowed methods, allowed content types,
/// and endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub methods: &'static [Method],
    pub media_types: &'static [&'static str],
    pub endpoint: Endpoint,
}

pub const APPLICATION_JSON: &str = "application/json";

/// The complete API surface: two POST-only, JSON-only routes.
const ROUTES: &[Route] = &[
    Route {
        path: "/sign",
        methods: &[Method::POST],
        media_types: &[APPLICATION_JSON],
        endpoint: Endpoint::Sign,
    },
    Route {
        path: "/verify",
        methods: &[Method::POST],
        media_types: &[APPLICATION_JSON],
        endpoint: Endpoint::Verify,
    },
];

/// Route lookup over the fixed table.
#[derive(Debug, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn new() -> Self {
        Self
    }

    /// All routes, for registration at server build time.
    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    /// Exact-path lookup.
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        ROUTES.iter().find(|route| route.path == path)
    }
}
