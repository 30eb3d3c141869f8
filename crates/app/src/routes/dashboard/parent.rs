use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use super::RoleShell;

#[component]
pub fn ParentDashboardPage() -> Element {
    rsx! {
        RoleShell { role: UserRole::Parent,
            Card {
                CardHeader {
                    CardTitle { "Your children" }
                }
                CardContent {
                    p { "Linked student accounts will appear here." }
                }
            }
        }
    }
}
