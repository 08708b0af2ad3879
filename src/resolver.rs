use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::session::Session;

/// Paths that render without any chrome (landing page and the auth-entry flows).
pub const HIDDEN_CHROME_ROUTES: &[&str] = &[
    "/",
    "/signin",
    "/signup",
    "/questions",
    "/therapist-signin",
    "/therapist-signup",
    "/therapist/questions",
];

/// Ordinary content pages, matched exactly.
pub const VALID_ROUTES: &[&str] = &[
    "/home",
    "/dashboard",
    "/messages",
    "/journals",
    "/add-journal",
    "/find-therapist",
    "/tips",
    "/profile",
    "/therapist-dashboard",
    "/therapist/patients",
    "/therapist/profile",
];

/// Parameterised pages; any path starting with one of these is valid.
pub const DYNAMIC_PREFIXES: &[&str] = &["/journal/", "/therapist/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    /// No nav/footer chrome.
    Hidden,
    Valid,
    NotFound,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Hidden => "hidden",
            Classification::Valid => "valid",
            Classification::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NavbarVariant {
    User,
    Therapist,
}

impl NavbarVariant {
    /// Anonymous visitors on a chrome page get the user navbar.
    pub fn for_session(session: &Session) -> Self {
        match session {
            Session::AuthenticatedTherapist { .. } => NavbarVariant::Therapist,
            Session::AuthenticatedUser { .. } | Session::Unauthenticated => NavbarVariant::User,
        }
    }
}

/// Layout
///
/// Which shell elements surround the page content for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct Layout {
    /// Dark-mode toggle, navbar and footer.
    pub chrome: bool,
    pub navbar: Option<NavbarVariant>,
    pub not_found_view: bool,
}

impl Layout {
    pub fn resolve(classification: Classification, session: &Session) -> Self {
        match classification {
            Classification::Hidden => Layout {
                chrome: false,
                navbar: None,
                not_found_view: false,
            },
            Classification::Valid | Classification::NotFound => Layout {
                chrome: true,
                navbar: Some(NavbarVariant::for_session(session)),
                not_found_view: classification == Classification::NotFound,
            },
        }
    }
}

/// RouteTable
///
/// The static configuration the resolver classifies against. The root path is
/// always part of the hidden set, whatever the caller passes in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteTable {
    hidden_chrome_routes: BTreeSet<String>,
    valid_routes: BTreeSet<String>,
    dynamic_prefixes: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(
            HIDDEN_CHROME_ROUTES.iter().copied(),
            VALID_ROUTES.iter().copied(),
            DYNAMIC_PREFIXES.iter().copied(),
        )
    }
}

impl RouteTable {
    pub fn new<'a>(
        hidden_chrome_routes: impl IntoIterator<Item = &'a str>,
        valid_routes: impl IntoIterator<Item = &'a str>,
        dynamic_prefixes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut hidden_chrome_routes: BTreeSet<String> =
            hidden_chrome_routes.into_iter().map(str::to_string).collect();
        hidden_chrome_routes.insert("/".to_string());

        Self {
            hidden_chrome_routes,
            valid_routes: valid_routes.into_iter().map(str::to_string).collect(),
            dynamic_prefixes: dynamic_prefixes
                .into_iter()
                .filter(|prefix| !prefix.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn classify(&self, path: &str) -> Classification {
        if self.hidden_chrome_routes.contains(path) {
            Classification::Hidden
        } else if self.valid_routes.contains(path)
            || self
                .dynamic_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
        {
            Classification::Valid
        } else {
            Classification::NotFound
        }
    }

    pub fn hidden_chrome_routes(&self) -> impl Iterator<Item = &str> {
        self.hidden_chrome_routes.iter().map(String::as_str)
    }

    pub fn valid_routes(&self) -> impl Iterator<Item = &str> {
        self.valid_routes.iter().map(String::as_str)
    }

    pub fn dynamic_prefixes(&self) -> impl Iterator<Item = &str> {
        self.dynamic_prefixes.iter().map(String::as_str)
    }
}
