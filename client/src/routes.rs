//! Application route table.
//!
//! `/` and every unknown path redirect to the landing page. The server uses
//! [`resolve`] for its fallback; the Leptos router mirrors the same table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/home";
pub const PLANNER_PATH: &str = "/app";
pub const HOW_IT_WORKS_PATH: &str = "/how-it-works";

/// Pages with their own view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Planner,
    HowItWorks,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Planner, Page::HowItWorks];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Planner => PLANNER_PATH,
            Self::HowItWorks => HOW_IT_WORKS_PATH,
        }
    }

    /// Path without the leading slash, for `StaticSegment`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

/// Outcome of routing a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Page),
    /// Replace-navigate to this path.
    Redirect(&'static str),
}

/// Route `path`; a trailing slash is ignored.
#[must_use]
pub fn resolve(path: &str) -> RouteMatch {
    let trimmed = path.trim_end_matches('/');
    Page::ALL
        .into_iter()
        .find(|page| page.path() == trimmed)
        .map_or(RouteMatch::Redirect(HOME_PATH), RouteMatch::Page)
}
