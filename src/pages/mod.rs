//! Page Route Map
//!
//! The client routes of the portal, grouped by the guard that protects them.
//! Each group module maps one access level.

/// Auth-entry pages, guarded so that signed-in principals are sent home.
pub mod public;

/// Pages for signed-in users ('user' role).
pub mod user;

/// Therapist portal pages ('therapist' role).
pub mod therapist;

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{
    error::RouteConfigError,
    guard::{Access, Guard, GuardDecision},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Page {
    Landing,
    SignIn,
    Registration,
    Questionnaire,
    TherapistSignIn,
    TherapistRegistration,
    TherapistQuestionnaire,
    Home,
    Dashboard,
    Messages,
    Journals,
    JournalEntry,
    AddJournal,
    FindTherapist,
    TherapistProfile,
    Tips,
    Profile,
    TherapistDashboard,
    TherapistPatients,
    TherapistPortalProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

// Same ranking weights as the browser router: static beats dynamic.
const STATIC_SEGMENT_SCORE: u32 = 10;
const DYNAMIC_SEGMENT_SCORE: u32 = 3;

/// Splits an absolute path into segments. `/` has none; a missing leading
/// slash or an empty segment (`//`, trailing `/`) is not a route path.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// RoutePattern
///
/// A client route such as `/journal/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouteConfigError> {
        let invalid = || RouteConfigError::InvalidPattern(raw.to_string());

        let segments = split_path(raw)
            .ok_or_else(invalid)?
            .into_iter()
            .map(|segment| match segment.strip_prefix(':') {
                Some("") => Err(invalid()),
                Some(name) => Ok(Segment::Param(name.to_string())),
                None => Ok(Segment::Static(segment.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn score(&self) -> u32 {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(_) => STATIC_SEGMENT_SCORE,
                Segment::Param(_) => DYNAMIC_SEGMENT_SCORE,
            })
            .sum()
    }

    /// Matches a concrete path exactly, returning the captured params.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts = split_path(path)?;
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub pattern: RoutePattern,
    pub page: Page,
}

/// RouteGroup
///
/// A set of page routes sharing one guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    pub access: Access,
    pub routes: Vec<PageRoute>,
}

impl RouteGroup {
    pub fn new(access: Access, routes: &[(&str, Page)]) -> Result<Self, RouteConfigError> {
        let routes = routes
            .iter()
            .map(|&(pattern, page)| {
                Ok(PageRoute {
                    pattern: RoutePattern::parse(pattern)?,
                    page,
                })
            })
            .collect::<Result<Vec<_>, RouteConfigError>>()?;

        Ok(Self { access, routes })
    }
}

/// PageMatch
///
/// The page route selected for a path together with the guard protecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatch<'a> {
    pub route: &'a PageRoute,
    pub access: &'a Access,
    pub params: BTreeMap<String, String>,
}

impl PageMatch<'_> {
    pub fn evaluate(&self, session: &Session) -> GuardDecision {
        self.access.evaluate(session)
    }
}

/// PageMap
///
/// All guarded route groups. Paths matching none of them fall through to the
/// not-found view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMap {
    groups: Vec<RouteGroup>,
}

impl PageMap {
    pub fn new(groups: Vec<RouteGroup>) -> Result<Self, RouteConfigError> {
        let mut seen = HashSet::new();
        for route in groups.iter().flat_map(|group| &group.routes) {
            if !seen.insert(route.pattern.as_str()) {
                return Err(RouteConfigError::DuplicateRoute(
                    route.pattern.as_str().to_string(),
                ));
            }
        }

        Ok(Self { groups })
    }

    /// The portal's route groups: public entry pages, user pages, therapist pages.
    pub fn portal() -> Result<Self, RouteConfigError> {
        Self::new(vec![
            public::public_routes()?,
            user::user_routes()?,
            therapist::therapist_routes()?,
        ])
    }

    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// Finds the best-ranked route for `path`. Ties go to the earliest declaration.
    pub fn find(&self, path: &str) -> Option<PageMatch<'_>> {
        let mut best: Option<(u32, PageMatch<'_>)> = None;

        for group in &self.groups {
            for route in &group.routes {
                let Some(params) = route.pattern.matches(path) else {
                    continue;
                };
                let score = route.pattern.score();
                if best.as_ref().is_some_and(|(top, _)| *top >= score) {
                    continue;
                }
                best = Some((
                    score,
                    PageMatch {
                        route,
                        access: &group.access,
                        params,
                    },
                ));
            }
        }

        best.map(|(_, found)| found)
    }
}
