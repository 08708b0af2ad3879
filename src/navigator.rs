use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::RouteConfigError,
    guard::GuardDecision,
    pages::{Page, PageMap},
    resolver::{Classification, Layout, RouteTable},
    session::Session,
};

/// Upper bound on redirects followed by `settle`.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    Render {
        page: Page,
        params: BTreeMap<String, String>,
    },
    Redirect {
        to: String,
    },
    NotFound,
}

impl Outcome {
    /// The wire tag, also used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Render { .. } => "render",
            Outcome::Redirect { .. } => "redirect",
            Outcome::NotFound => "not_found",
        }
    }
}

/// Navigation
///
/// Everything the shell needs for one render pass of `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct Navigation {
    pub path: String,
    pub classification: Classification,
    pub layout: Layout,
    pub outcome: Outcome,
}

/// Navigator
///
/// Combines the chrome resolver with the guarded page map. Immutable once
/// built, so it is shared across requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    pages: PageMap,
}

impl Navigator {
    /// Builds a navigator, rejecting configurations where a guard redirect
    /// would bounce between pages forever for some kind of session.
    ///
    /// A request path spends one hop reaching a redirect target, so every
    /// target must settle within `MAX_REDIRECTS - 1` further hops.
    pub fn new(table: RouteTable, pages: PageMap) -> Result<Self, RouteConfigError> {
        let navigator = Self { table, pages };

        let sessions = [
            Session::Unauthenticated,
            Session::AuthenticatedUser { id: Uuid::nil() },
            Session::AuthenticatedTherapist { id: Uuid::nil() },
        ];
        for group in navigator.pages.groups() {
            for target in group.access.redirect_targets() {
                for session in &sessions {
                    let (_, hops) = navigator.follow(target, session);
                    if hops.len() >= MAX_REDIRECTS {
                        return Err(RouteConfigError::redirect_loop(target, session.role()));
                    }
                }
            }
        }

        Ok(navigator)
    }

    pub fn portal() -> Result<Self, RouteConfigError> {
        Self::new(RouteTable::default(), PageMap::portal()?)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn pages(&self) -> &PageMap {
        &self.pages
    }

    pub fn classify(&self, path: &str) -> Classification {
        self.table.classify(path)
    }

    /// Evaluates one render pass. Classification and the guard run
    /// independently of each other; the not-found view follows the page
    /// outcome so the two never disagree.
    pub fn navigate(&self, path: &str, session: &Session) -> Navigation {
        let classification = self.table.classify(path);

        let outcome = match self.pages.find(path) {
            None => Outcome::NotFound,
            Some(found) => match found.evaluate(session) {
                GuardDecision::Allow => Outcome::Render {
                    page: found.route.page,
                    params: found.params,
                },
                GuardDecision::Redirect(to) => Outcome::Redirect { to },
            },
        };

        let mut layout = Layout::resolve(classification, session);
        layout.not_found_view = outcome == Outcome::NotFound;

        Navigation {
            path: path.to_string(),
            classification,
            layout,
            outcome,
        }
    }

    /// Follows redirects until a page renders or the not-found view shows.
    /// Returns the final navigation and the redirected-from paths in order.
    pub fn settle(&self, path: &str, session: &Session) -> (Navigation, Vec<String>) {
        let (navigation, hops) = self.follow(path, session);
        if hops.len() > MAX_REDIRECTS {
            tracing::warn!(path, hops = hops.len(), "redirect chain did not settle");
        }
        (navigation, hops)
    }

    fn follow(&self, path: &str, session: &Session) -> (Navigation, Vec<String>) {
        let mut navigation = self.navigate(path, session);
        let mut hops = Vec::new();

        while let Outcome::Redirect { to } = &navigation.outcome {
            let next = to.clone();
            hops.push(navigation.path.clone());
            if hops.len() > MAX_REDIRECTS {
                break;
            }
            navigation = self.navigate(&next, session);
        }

        (navigation, hops)
    }
}
