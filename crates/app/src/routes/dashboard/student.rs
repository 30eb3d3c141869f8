use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use super::RoleShell;
use crate::components::AssignmentSummary;
use crate::fixtures::{placeholder_assignments, placeholder_timetable};
use crate::routes::Route;

/// Student home: first day of the timetable and the open assignments.
#[component]
pub fn StudentDashboardPage() -> Element {
    let today: Vec<_> = placeholder_timetable()
        .into_iter()
        .filter(|slot| slot.day == "Monday")
        .collect();
    let assignments = placeholder_assignments();

    rsx! {
        RoleShell { role: UserRole::Student,
            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Timetable" }
                    }
                    CardContent {
                        ul { class: "timetable-today",
                            for slot in today {
                                li { key: "{slot.period}",
                                    span { class: "timetable-period", "P{slot.period}" }
                                    span { class: "timetable-subject", "{slot.subject}" }
                                    span { class: "timetable-room", "{slot.room}" }
                                }
                            }
                        }
                        Link { to: Route::StudentTimetable {}, "Full timetable" }
                    }
                }
                div { class: "dashboard-assignments",
                    for assignment in assignments {
                        AssignmentSummary { key: "{assignment.id}", assignment: assignment.clone(),
                            Link {
                                to: Route::StudentAssignment { id: Some(assignment.id.clone()) },
                                "Open"
                            }
                        }
                    }
                }
            }
        }
    }
}
