use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// Role
///
/// The role discriminator carried by every authenticated principal.
/// Guards compare against this value; the navbar variant is chosen from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    User,
    Therapist,
}

impl Role {
    /// Parses the wire form used in token claims and the local bypass header.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "therapist" => Some(Role::Therapist),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Therapist => "therapist",
        }
    }
}

/// Principal
///
/// The authenticated identity driving role-based access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
}

/// Session
///
/// The ambient authentication state, modelled as a tagged union so that a
/// simultaneous user + therapist login cannot be represented.
///
/// Sessions are created by the auth layer (see `auth`) and passed explicitly
/// into the resolver and the guards; nothing in the navigation core looks
/// them up implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    AuthenticatedUser { id: Uuid },
    AuthenticatedTherapist { id: Uuid },
}

impl Session {
    pub fn principal(&self) -> Option<Principal> {
        match *self {
            Session::Unauthenticated => None,
            Session::AuthenticatedUser { id } => Some(Principal {
                id,
                role: Role::User,
            }),
            Session::AuthenticatedTherapist { id } => Some(Principal {
                id,
                role: Role::Therapist,
            }),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.principal().map(|p| p.role)
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Session::Unauthenticated)
    }
}

impl From<Principal> for Session {
    fn from(principal: Principal) -> Self {
        match principal.role {
            Role::User => Session::AuthenticatedUser { id: principal.id },
            Role::Therapist => Session::AuthenticatedTherapist { id: principal.id },
        }
    }
}

impl From<Option<Principal>> for Session {
    fn from(principal: Option<Principal>) -> Self {
        principal.map(Session::from).unwrap_or_default()
    }
}
