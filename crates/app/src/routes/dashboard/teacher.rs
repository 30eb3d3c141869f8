use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use super::RoleShell;
use crate::fixtures::placeholder_assignments;
use crate::routes::Route;

/// Teacher home: assignments set so far with their submission counts.
#[component]
pub fn TeacherDashboardPage() -> Element {
    let assignments = placeholder_assignments();

    rsx! {
        RoleShell { role: UserRole::Teacher,
            Card {
                CardHeader {
                    CardTitle { "Set assignments" }
                }
                CardContent {
                    table { class: "teacher-assignments",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Class" }
                                th { "Due" }
                                th { "Submissions" }
                            }
                        }
                        tbody {
                            for assignment in assignments {
                                tr { key: "{assignment.id}",
                                    td { "{assignment.title}" }
                                    td { "{assignment.assigned_to}" }
                                    td { "{assignment.due_by}" }
                                    td { {assignment.submission_count().to_string()} }
                                }
                            }
                        }
                    }
                    Link { to: Route::TeacherAssignments {}, "Manage assignments" }
                }
            }
        }
    }
}
