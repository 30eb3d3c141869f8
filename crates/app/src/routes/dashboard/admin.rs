use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use super::RoleShell;

/// Administrator home. Management panels are not wired in yet.
#[component]
pub fn AdminDashboardPage() -> Element {
    rsx! {
        RoleShell { role: UserRole::Admin,
            Card {
                CardHeader {
                    CardTitle { "School administration" }
                }
                CardContent {
                    p { "Accounts, classes and timetables will be managed from here." }
                }
            }
        }
    }
}
