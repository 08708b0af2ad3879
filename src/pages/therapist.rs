use super::{Page, RouteGroup};
use crate::{
    error::RouteConfigError,
    guard::{Access, RoleGuard},
    session::Role,
};

pub const THERAPIST_SIGNIN_PATH: &str = "/therapist-signin";

/// Therapist Route Group
///
/// The therapist portal. Users and anonymous visitors are sent to the
/// therapist sign-in page.
pub fn therapist_routes() -> Result<RouteGroup, RouteConfigError> {
    let guard = RoleGuard::new([Role::Therapist], THERAPIST_SIGNIN_PATH)?;

    RouteGroup::new(
        Access::Protected(guard),
        &[
            ("/therapist-dashboard", Page::TherapistDashboard),
            ("/therapist/patients", Page::TherapistPatients),
            ("/therapist/profile", Page::TherapistPortalProfile),
        ],
    )
}
