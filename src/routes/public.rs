use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// The navigation API needs no authentication: anonymous visitors are a
/// normal session state. The caller's session, if any, is resolved per
/// request by the `Session` extractor.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
        // GET /navigation?path=...&follow=...&viewport_width=...
        // Classification, layout and guard outcome for one client navigation.
        .route("/navigation", get(handlers::get_navigation))
        // GET /routes
        // The static route table and guarded page groups.
        .route("/routes", get(handlers::get_route_table))
}
