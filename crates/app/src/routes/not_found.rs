use dioxus::prelude::*;
use shared_types::PortalError;

use crate::routes::Route;

/// Shown for any path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let error = PortalError::RouteNotFound(path);
    tracing::debug!(%error, "no route matched");
    let message = error.friendly_message();

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message", "{message}" }
                Link { to: Route::Login {}, class: "not-found-link", "Back to the portal" }
            }
        }
    }
}
