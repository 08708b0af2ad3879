use std::sync::Arc;

use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Navigation core: sessions, guards, the chrome resolver and the page map.
pub mod error;
pub mod guard;
pub mod layout;
pub mod navigator;
pub mod pages;
pub mod resolver;
pub mod session;

// HTTP edge: configuration, session extraction, handlers and schemas.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
use routes::public;

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::RouteConfigError;
pub use navigator::{Navigation, Navigator, Outcome};
pub use session::{Principal, Role, Session};

/// ApiDoc
///
/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_navigation, handlers::get_route_table),
    components(
        schemas(
            models::NavigationResponse, models::RouteTableResponse,
            models::RouteGroupDescriptor, models::PageRouteDescriptor,
            navigator::Navigation, navigator::Outcome,
            resolver::Classification, resolver::Layout, resolver::NavbarVariant,
            resolver::RouteTable, guard::Access, guard::RoleGuard, guard::PublicGuard,
            layout::ToastPlacement, pages::Page, session::Role,
        )
    ),
    tags(
        (name = "mindful-portal", description = "Portal navigation access API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable state for all requests.
#[derive(Clone)]
pub struct AppState {
    /// Route table, page map and guards; built once at startup.
    pub navigator: Arc<Navigator>,
    pub config: AppConfig,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routes, the request-id/tracing layers and CORS.
pub fn create_router(state: AppState) -> Router {
    // The SPA is served from another origin.
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for one HTTP request, keyed by the generated `x-request-id`. The
/// navigation fields start empty; `handlers::get_navigation` records the
/// caller's role, the requested client path and the decision into it.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "navigation_request",
        method = %request.method(),
        endpoint = %request.uri().path(),
        req_id = %request_id,
        role = tracing::field::Empty,
        client_path = tracing::field::Empty,
        classification = tracing::field::Empty,
        outcome = tracing::field::Empty,
    )
}
