use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

use crate::{
    guard::Access,
    layout::ToastPlacement,
    navigator::Navigation,
    pages::{Page, RouteGroup},
    resolver::RouteTable,
};

// --- Request Schemas ---

/// NavigationQuery
///
/// Query parameters for `GET /navigation`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// The client-side path being navigated to.
    pub path: String,
    /// Follow guard redirects until a page renders.
    #[serde(default)]
    pub follow: bool,
    /// Current viewport width in CSS pixels, when the client knows it.
    pub viewport_width: Option<u32>,
}

// --- Response Schemas ---

/// NavigationResponse
///
/// Output of `GET /navigation`: the evaluated render pass plus presentation
/// hints derived outside the resolver.
#[derive(Debug, Clone, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct NavigationResponse {
    #[serde(flatten)]
    pub navigation: Navigation,
    /// Paths redirected from, in order. Empty unless `follow` was set.
    pub redirected_from: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_placement: Option<ToastPlacement>,
}

#[derive(Debug, Clone, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct PageRouteDescriptor {
    pub pattern: String,
    pub page: Page,
}

#[derive(Debug, Clone, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteGroupDescriptor {
    pub access: Access,
    pub routes: Vec<PageRouteDescriptor>,
}

impl From<&RouteGroup> for RouteGroupDescriptor {
    fn from(group: &RouteGroup) -> Self {
        Self {
            access: group.access.clone(),
            routes: group
                .routes
                .iter()
                .map(|route| PageRouteDescriptor {
                    pattern: route.pattern.as_str().to_string(),
                    page: route.page,
                })
                .collect(),
        }
    }
}

/// RouteTableResponse
///
/// Output of `GET /routes`: the static chrome table and the guarded page groups.
#[derive(Debug, Clone, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteTableResponse {
    pub table: RouteTable,
    pub groups: Vec<RouteGroupDescriptor>,
}
