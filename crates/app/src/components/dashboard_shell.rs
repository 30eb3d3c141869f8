use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::PageHeader;

use super::ProfileWidget;

/// Frame shared by every role dashboard: role heading, role content, and the
/// profile widget. Everything it shows comes from props.
#[component]
pub fn DashboardShell(
    role: UserRole,
    user_name: String,
    user_type: String,
    logged_in: bool,
    #[props(default)] dob: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "dashboard-shell", "data-role": role.as_str(),
            PageHeader { title: role.dashboard_label().to_string() }
            div { class: "dashboard-body",
                section { class: "dashboard-content", {children} }
                aside { class: "dashboard-aside",
                    ProfileWidget {
                        user_name: user_name,
                        user_type: user_type,
                        logged_in: logged_in,
                        dob: dob,
                    }
                }
            }
        }
    }
}
