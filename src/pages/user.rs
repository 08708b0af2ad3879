use super::{Page, RouteGroup};
use crate::{
    error::RouteConfigError,
    guard::{Access, RoleGuard},
    session::Role,
};

pub const USER_SIGNIN_PATH: &str = "/signin";

/// User Route Group
///
/// Everything a signed-in user can reach: home, diagnosis dashboard,
/// messaging, journaling, therapist search and tips.
///
/// `/therapist/:id` is a user page (a therapist's public profile); the
/// therapist portal's own `/therapist/patients` and `/therapist/profile`
/// outrank it because static segments score higher.
pub fn user_routes() -> Result<RouteGroup, RouteConfigError> {
    let guard = RoleGuard::new([Role::User], USER_SIGNIN_PATH)?;

    RouteGroup::new(
        Access::Protected(guard),
        &[
            ("/home", Page::Home),
            ("/dashboard", Page::Dashboard),
            ("/messages", Page::Messages),
            ("/journals", Page::Journals),
            ("/journal/:id", Page::JournalEntry),
            ("/add-journal", Page::AddJournal),
            ("/find-therapist", Page::FindTherapist),
            ("/therapist/:id", Page::TherapistProfile),
            ("/tips", Page::Tips),
            ("/profile", Page::Profile),
        ],
    )
}
