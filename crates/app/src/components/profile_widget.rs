use chrono::{DateTime, Local, TimeZone};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{Alert, AlertVariant, Badge, BadgeVariant, Card, CardContent};
use std::fmt;

use crate::api::use_auth_client;
use crate::routes::Route;
use crate::session::use_session;

/// Wall-clock time and date as shown in the profile widget.
///
/// Taken once per render; the widget does not tick on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// `HH:MM`, 24-hour.
    pub time: String,
    /// e.g. `Tuesday, March 5`.
    pub date: String,
}

impl ClockSnapshot {
    pub fn at<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            time: moment.format("%H:%M").to_string(),
            date: moment.format("%A, %B %-d").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

/// Up to two uppercase initials for the avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Identity card with clock and sign-out button.
#[component]
pub fn ProfileWidget(
    user_name: String,
    #[props(default)] user_type: String,
    #[props(default)] logged_in: bool,
    #[props(default)] dob: Option<String>,
) -> Element {
    let mut state = use_session();
    let client = use_auth_client();
    let mut pending = use_signal(|| false);
    let mut logout_error = use_signal(|| Option::<String>::None);

    let clock = ClockSnapshot::now();
    let avatar = initials(&user_name);
    let role_name = UserRole::parse(&user_type).ok().map(|r| r.display_name());
    let dob = dob.filter(|d| !d.trim().is_empty());

    // The future is owned by this component's scope and dropped with it.
    let handle_logout = move |_: MouseEvent| {
        let client = client.clone();
        async move {
            pending.set(true);
            logout_error.set(None);

            let outcome = client.logout().await;
            match state.complete_logout(outcome) {
                Ok(()) => {
                    navigator().replace(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign out failed, session kept");
                    logout_error.set(Some(e.friendly_message()));
                }
            }
            pending.set(false);
        }
    };

    rsx! {
        Card { class: "profile-widget",
            CardContent {
                div { class: "profile-identity",
                    div { class: "profile-avatar", "{avatar}" }
                    div { class: "profile-names",
                        span { class: "profile-name", "{user_name}" }
                        if let Some(role) = role_name {
                            Badge { variant: BadgeVariant::Outline, "{role}" }
                        }
                    }
                }

                if let Some(dob) = dob {
                    p { class: "profile-dob", "Born {dob}" }
                }

                div { class: "profile-clock",
                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                    span { class: "profile-clock-time", "{clock.time}" }
                    span { class: "profile-clock-date", "{clock.date}" }
                }

                if let Some(err) = logout_error() {
                    Alert { variant: AlertVariant::Error, "{err}" }
                }

                if logged_in {
                    button {
                        class: "profile-logout button",
                        r#type: "button",
                        disabled: pending(),
                        onclick: handle_logout,
                        if pending() { "Signing out..." } else { "Sign Out" }
                    }
                }
            }
        }
    }
}
