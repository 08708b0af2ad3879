use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{
    error::RouteConfigError,
    session::{Role, Session},
};

/// GuardDecision
///
/// Advisory result of a guard evaluation. The router (the client) performs the
/// actual navigation; guards never mutate the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Guard
///
/// A route-level access check. Implementations must be pure: the same session
/// always yields the same decision.
pub trait Guard {
    fn evaluate(&self, session: &Session) -> GuardDecision;
}

fn check_redirect(path: &str) -> Result<String, RouteConfigError> {
    if path.starts_with('/') {
        Ok(path.to_string())
    } else {
        Err(RouteConfigError::InvalidRedirectPath(path.to_string()))
    }
}

/// RoleGuard
///
/// Lets a session through only when it carries a principal whose role is in
/// `allowed_roles`; everything else is sent to `redirect_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct RoleGuard {
    allowed_roles: BTreeSet<Role>,
    redirect_path: String,
}

impl RoleGuard {
    pub fn new(
        allowed_roles: impl IntoIterator<Item = Role>,
        redirect_path: &str,
    ) -> Result<Self, RouteConfigError> {
        let allowed_roles: BTreeSet<Role> = allowed_roles.into_iter().collect();
        if allowed_roles.is_empty() {
            return Err(RouteConfigError::EmptyAllowedRoles);
        }

        Ok(Self {
            allowed_roles,
            redirect_path: check_redirect(redirect_path)?,
        })
    }

    pub fn allowed_roles(&self) -> &BTreeSet<Role> {
        &self.allowed_roles
    }

    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }
}

impl Guard for RoleGuard {
    fn evaluate(&self, session: &Session) -> GuardDecision {
        match session.role() {
            Some(role) if self.allowed_roles.contains(&role) => GuardDecision::Allow,
            _ => GuardDecision::Redirect(self.redirect_path.clone()),
        }
    }
}

/// PublicGuard
///
/// Wraps the auth-entry pages (sign in, sign up, questionnaires). Visitors
/// without a session see the page; signed-in principals are sent to the
/// landing page of their role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct PublicGuard {
    user_redirect_path: String,
    therapist_redirect_path: String,
}

impl PublicGuard {
    pub fn new(
        user_redirect_path: &str,
        therapist_redirect_path: &str,
    ) -> Result<Self, RouteConfigError> {
        Ok(Self {
            user_redirect_path: check_redirect(user_redirect_path)?,
            therapist_redirect_path: check_redirect(therapist_redirect_path)?,
        })
    }

    pub fn user_redirect_path(&self) -> &str {
        &self.user_redirect_path
    }

    pub fn therapist_redirect_path(&self) -> &str {
        &self.therapist_redirect_path
    }
}

impl Guard for PublicGuard {
    fn evaluate(&self, session: &Session) -> GuardDecision {
        match session {
            Session::Unauthenticated => GuardDecision::Allow,
            Session::AuthenticatedUser { .. } => {
                GuardDecision::Redirect(self.user_redirect_path.clone())
            }
            Session::AuthenticatedTherapist { .. } => {
                GuardDecision::Redirect(self.therapist_redirect_path.clone())
            }
        }
    }
}

/// Access
///
/// The guard attached to a group of page routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Access {
    Public(PublicGuard),
    Protected(RoleGuard),
}

impl Guard for Access {
    fn evaluate(&self, session: &Session) -> GuardDecision {
        match self {
            Access::Public(guard) => guard.evaluate(session),
            Access::Protected(guard) => guard.evaluate(session),
        }
    }
}

impl Access {
    /// Every path this guard may redirect to.
    pub fn redirect_targets(&self) -> Vec<&str> {
        match self {
            Access::Public(guard) => vec![
                guard.user_redirect_path(),
                guard.therapist_redirect_path(),
            ],
            Access::Protected(guard) => vec![guard.redirect_path()],
        }
    }
}
