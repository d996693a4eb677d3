//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::SessionConfig;
use crate::nav::RouteTable;
use crate::nav::registry::{DASHBOARD_PATH, DOCKER_PATH, PROCESSES_PATH, SERVICES_PATH, SETTINGS_PATH};
use crate::pages::{layout::DashboardLayout, login::LoginPage, section::SectionPage};
use crate::state::session::SessionStore;
use crate::util::auth::install_route_guard;
use crate::util::storage::LocalStorage;

/// Checks every navigation against `routes`. Must sit inside `<Router>`.
#[component]
fn RouteGuard(routes: RouteTable) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    install_route_guard(session, routes, location.pathname, use_navigate());
}

/// Root application component.
///
/// Restores the session from `localStorage`, provides it as context, and
/// sets up client-side routing behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SessionConfig::default();
    let routes = RouteTable::gopanel(&config.login_path);
    let session = RwSignal::new(SessionStore::initialize(LocalStorage, config));
    provide_context(session);

    view! {
        <Title text="GoPanel"/>

        <Router>
            <RouteGuard routes/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=DashboardLayout>
                    // `/` itself is redirected by the route table.
                    <Route path=StaticSegment("") view=|| ()/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <SectionPage path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("processes") view=|| view! { <SectionPage path=PROCESSES_PATH/> }/>
                    <Route path=StaticSegment("docker") view=|| view! { <SectionPage path=DOCKER_PATH/> }/>
                    <Route path=StaticSegment("services") view=|| view! { <SectionPage path=SERVICES_PATH/> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <SectionPage path=SETTINGS_PATH/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
