//! Route registry: path to access flags plus static redirects.
//!
//! DESIGN
//! ======
//! Access metadata is an explicit map consulted by [`guard`] rather than
//! something attached to router components. Paths missing from the map
//! require authentication. Static redirects are resolved before the guard
//! runs, so the guard always judges the final target.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use super::guard::{NavDecision, RouteAccess, guard};
use crate::config::DEFAULT_LOGIN_PATH;

pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROCESSES_PATH: &str = "/processes";
pub const DOCKER_PATH: &str = "/docker";
pub const SERVICES_PATH: &str = "/services";
pub const SETTINGS_PATH: &str = "/settings";

/// Dashboard sections rendered inside the shared layout, in nav order.
pub const DASHBOARD_SECTIONS: [&str; 5] = [DASHBOARD_PATH, PROCESSES_PATH, DOCKER_PATH, SERVICES_PATH, SETTINGS_PATH];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteAccess>,
    redirects: BTreeMap<String, String>,
    login_path: String,
}

impl RouteTable {
    /// Empty table whose only entry is the public login route.
    #[must_use]
    pub fn new(login_path: &str) -> Self {
        let login_path = normalize_path(login_path);
        let mut routes = BTreeMap::new();
        routes.insert(login_path.clone(), RouteAccess::PUBLIC);
        Self { routes, redirects: BTreeMap::new(), login_path }
    }

    /// The gopanel dashboard routes.
    #[must_use]
    pub fn gopanel(login_path: &str) -> Self {
        DASHBOARD_SECTIONS
            .iter()
            .fold(Self::new(login_path), |table, path| table.with_route(path, RouteAccess::PROTECTED))
            .with_route(ROOT_PATH, RouteAccess::PROTECTED)
            .with_redirect(ROOT_PATH, DASHBOARD_PATH)
    }

    #[must_use]
    pub fn with_route(mut self, path: &str, access: RouteAccess) -> Self {
        self.routes.insert(normalize_path(path), access);
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(normalize_path(from), normalize_path(to));
        self
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Access flags for `path`; unregistered paths require auth.
    #[must_use]
    pub fn access(&self, path: &str) -> RouteAccess {
        self.routes.get(&normalize_path(path)).copied().unwrap_or_default()
    }

    /// Follow static redirects from `path` to its final target.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        let mut current = normalize_path(path);
        // A cycle stops after visiting every redirect once.
        for _ in 0..=self.redirects.len() {
            match self.redirects.get(&current) {
                Some(next) if *next != current => current.clone_from(next),
                _ => break,
            }
        }
        current
    }

    /// Decide a navigation to `path` for the given session token.
    ///
    /// Returns `Redirect` when either a static redirect or the guard moves
    /// the user elsewhere.
    #[must_use]
    pub fn admit(&self, path: &str, token: &str) -> NavDecision {
        let requested = normalize_path(path);
        let target = self.resolve(&requested);
        match guard(self.access(&target), token, &self.login_path) {
            NavDecision::Proceed if target != requested => NavDecision::Redirect(target),
            decision => decision,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::gopanel(DEFAULT_LOGIN_PATH)
    }
}

/// Canonical form: leading slash, no trailing slash except for the root.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}
