use crate::session::Role;

/// RouteConfigError
///
/// Defects in the static route configuration. These are reported when a guard,
/// a page map or the navigator is constructed; evaluation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteConfigError {
    #[error("role guard must allow at least one role")]
    EmptyAllowedRoles,

    #[error("redirect path must be absolute, got {0:?}")]
    InvalidRedirectPath(String),

    #[error("invalid route pattern {0:?}")]
    InvalidPattern(String),

    #[error("route pattern {0:?} is declared more than once")]
    DuplicateRoute(String),

    #[error("redirect from {path:?} does not settle for {session}")]
    RedirectLoop { path: String, session: String },
}

impl RouteConfigError {
    pub(crate) fn redirect_loop(path: &str, role: Option<Role>) -> Self {
        RouteConfigError::RedirectLoop {
            path: path.to_string(),
            session: role.as_ref().map_or("anonymous visitors", Role::as_str).to_string(),
        }
    }
}
