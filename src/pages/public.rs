use super::{Page, RouteGroup};
use crate::{
    error::RouteConfigError,
    guard::{Access, PublicGuard},
};

pub const USER_LANDING_PATH: &str = "/home";
pub const THERAPIST_LANDING_PATH: &str = "/therapist/patients";

/// Public Route Group
///
/// Landing page plus the sign-in, sign-up and questionnaire flows of both
/// portals. A visitor who already holds a session is sent to the landing
/// page of their role instead.
pub fn public_routes() -> Result<RouteGroup, RouteConfigError> {
    let guard = PublicGuard::new(USER_LANDING_PATH, THERAPIST_LANDING_PATH)?;

    RouteGroup::new(
        Access::Public(guard),
        &[
            ("/", Page::Landing),
            ("/signin", Page::SignIn),
            ("/signup", Page::Registration),
            ("/questions", Page::Questionnaire),
            ("/therapist-signin", Page::TherapistSignIn),
            ("/therapist-signup", Page::TherapistRegistration),
            ("/therapist/questions", Page::TherapistQuestionnaire),
        ],
    )
}
