//! Router glue for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change, including the initial load, is checked against the
//! route table using the current session token. Session changes re-run the
//! check too, so logging out on a protected page lands on `/login`.
//!
//! TIMING
//! ======
//! The check is an `Effect`, so it runs after the router has committed the
//! new location and rendered the matched route. Protected content stays
//! hidden because `DashboardLayout` renders its `Show` fallback until a
//! session exists. The visible cost is a brief "Redirecting to login..."
//! before the redirect lands.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::nav::RouteTable;
use crate::state::session::SessionStore;

/// Redirect target for a navigation to `pathname`, or `None` to proceed.
pub fn redirect_for(routes: &RouteTable, pathname: &str, token: &str) -> Option<String> {
    routes.admit(pathname, token).redirect_target().map(str::to_owned)
}

/// Run the guard whenever `pathname` or the session changes.
pub fn install_route_guard<F>(session: RwSignal<SessionStore>, routes: RouteTable, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let token = session.with(|s| s.token().to_owned());
        if let Some(target) = redirect_for(&routes, &path, &token) {
            log::debug!("navigation to {path} redirected to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
