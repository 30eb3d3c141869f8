pub mod admin;
pub mod parent;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::UserRole;

use crate::components::DashboardShell;
use crate::session::use_session;

/// `/dashboard`. The session guard always redirects away from here, so this
/// only shows for the frame before the redirect lands.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "session-guard-loading",
            p { "Opening your dashboard..." }
        }
    }
}

/// `/profile`. Redirected to the role profile page by the session guard.
#[component]
pub fn Profile() -> Element {
    rsx! {
        div { class: "session-guard-loading",
            p { "Opening your profile..." }
        }
    }
}

/// Wraps role content in a [`DashboardShell`] fed from the current session.
#[component]
fn RoleShell(role: UserRole, children: Element) -> Element {
    let session = use_session().snapshot();

    rsx! {
        DashboardShell {
            role: role,
            user_name: session.user_name.clone(),
            user_type: session.user_type.clone(),
            logged_in: session.logged_in,
            dob: session.dob().map(str::to_string),
            {children}
        }
    }
}
