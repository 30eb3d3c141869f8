use dioxus::prelude::*;

/// Title bar at the top of a page, with optional subtitle and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if let Some(sub) = subtitle {
                    p { class: "page-subtitle", "{sub}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
