use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    layout::ToastPlacement,
    models::{NavigationQuery, NavigationResponse, RouteGroupDescriptor, RouteTableResponse},
    session::Session,
};

/// get_navigation
///
/// Evaluates a client-side navigation for the caller's session: the chrome
/// classification and layout of `path`, and whether its page renders,
/// redirects or shows the not-found view.
///
/// With `follow=true` the redirect chain is resolved server-side and the
/// final render pass is returned.
#[utoipa::path(
    get,
    path = "/navigation",
    params(NavigationQuery),
    responses((status = 200, description = "Navigation decision", body = NavigationResponse))
)]
pub async fn get_navigation(
    session: Session,
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let (navigation, redirected_from) = if query.follow {
        state.navigator.settle(&query.path, &session)
    } else {
        (state.navigator.navigate(&query.path, &session), Vec::new())
    };

    let role = session.role().map_or("anonymous", |role| role.as_str());
    tracing::Span::current()
        .record("role", role)
        .record("client_path", query.path.as_str())
        .record("classification", navigation.classification.as_str())
        .record("outcome", navigation.outcome.kind());
    tracing::debug!(hops = redirected_from.len(), "navigation evaluated");

    let toast_placement = query
        .viewport_width
        .map(|width| ToastPlacement::for_viewport(width, state.config.mobile_breakpoint_px));

    Json(NavigationResponse {
        navigation,
        redirected_from,
        toast_placement,
    })
}

/// get_route_table
///
/// Exposes the static route configuration so clients can mirror it.
#[utoipa::path(
    get,
    path = "/routes",
    responses((status = 200, description = "Route table", body = RouteTableResponse))
)]
pub async fn get_route_table(State(state): State<AppState>) -> Json<RouteTableResponse> {
    Json(RouteTableResponse {
        table: state.navigator.table().clone(),
        groups: state
            .navigator
            .pages()
            .groups()
            .iter()
            .map(RouteGroupDescriptor::from)
            .collect(),
    })
}
