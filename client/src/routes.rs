//! Route table shared by the router and the host.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every user-facing route. Each maps to exactly one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Topics,
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Login, AppRoute::Topics];

    /// Path segment without the leading slash, as the router matches it.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Topics => "topics",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Topics => "/topics",
        }
    }

    /// Resolve a request path to its route. There is no catch-all, so any
    /// other path yields `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
