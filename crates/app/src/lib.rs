//! School portal web client: session-aware routing into per-role dashboards.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod fixtures;
pub mod routes;
pub mod session;

pub use routes::Route;
use session::SessionState;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

/// Root component. Provides the session context and the shared auth client,
/// checks for an existing session once, and mounts the router.
#[component]
pub fn App() -> Element {
    let mut state = use_context_provider(SessionState::new);
    let client = use_context_provider(api::AuthClient::from_config);

    // Runs once; the guard layout waits on `hydrated` before deciding.
    use_hook(move || {
        spawn(async move {
            let outcome = client.current_session().await;
            state.hydrate(outcome);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        Router::<Route> {}
    }
}
