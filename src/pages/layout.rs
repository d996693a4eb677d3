//! Shared dashboard layout: section nav, signed-in user, logout.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use super::section::section_title;
use crate::nav::registry::DASHBOARD_SECTIONS;
use crate::state::session::SessionStore;

/// Wraps every protected section. Renders nothing useful until a session
/// exists; the route guard handles the redirect.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let display_name = move || session.with(|s| s.display_name().to_owned());
    let on_logout = move |_| session.update(|s| s.clear());

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <p class="layout__redirect">"Redirecting to login..."</p> }
        >
            <div class="layout">
                <nav class="layout__nav">
                    {DASHBOARD_SECTIONS
                        .iter()
                        .map(|path| view! { <A href=*path>{section_title(path)}</A> })
                        .collect_view()}
                </nav>
                <header class="layout__header">
                    <span class="layout__user">{display_name}</span>
                    <button class="btn layout__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="layout__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
