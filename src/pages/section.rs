//! Dashboard section page showing the server's JSON for that section.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;

use crate::net::api::{ApiRequest, get_json};
use crate::state::session::SessionStore;

/// Human title for a section path, e.g. `/docker` -> `Docker`.
pub fn section_title(path: &str) -> String {
    let name = path.trim_matches('/');
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Fetches `GET /api{path}` with the current session and renders the body.
/// Refetches when the session changes.
#[component]
pub fn SectionPage(path: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let data = LocalResource::new(move || {
        let request = session.with(|s| ApiRequest::from_session(s, path));
        get_json::<serde_json::Value>(request)
    });

    view! {
        <section class="section-page">
            <h2 class="section-page__title">{section_title(path)}</h2>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    data.get()
                        .map(|result| match result {
                            Ok(value) => view! { <pre class="section-page__data">{pretty_json(&value)}</pre> }.into_any(),
                            Err(e) => view! { <p class="section-page__error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
