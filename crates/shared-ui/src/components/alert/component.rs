use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }
}

/// Inline status message. Shows a dismiss button when `on_dismiss` is set.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let role = if variant == AlertVariant::Error { "alert" } else { "status" };

    rsx! {
        div { class: "alert", "data-variant": variant.class(), role: role,
            div { class: "alert-body", {children} }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| handler.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}
