use dioxus::prelude::*;
use shared_ui::{Alert, AlertVariant, PageHeader};

use crate::components::{AssignmentSummary, AssignmentView};
use crate::fixtures::{find_assignment, placeholder_assignments};
use crate::routes::Route;

/// `/student/assignments`.
#[component]
pub fn StudentAssignmentsPage() -> Element {
    let assignments = placeholder_assignments();

    rsx! {
        PageHeader { title: "Assignments", subtitle: "Work set for your classes" }
        div { class: "assignment-list",
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

/// `/teacher/assignments`: what this teacher has set, with submission counts.
#[component]
pub fn TeacherAssignmentsPage() -> Element {
    let assignments = placeholder_assignments();

    rsx! {
        PageHeader { title: "Assignments", subtitle: "Work you have set" }
        div { class: "assignment-list",
            for assignment in assignments {
                AssignmentSummary { key: "{assignment.id}", assignment: assignment.clone(),
                    p { class: "assignment-submissions",
                        {format!("{} submitted", assignment.submission_count())}
                    }
                }
            }
        }
    }
}

/// `/student/assignment?id=`.
#[component]
pub fn AssignmentDetailPage(id: Option<String>) -> Element {
    let found = id.as_deref().and_then(find_assignment);

    match found {
        Some(assignment) => rsx! {
            AssignmentView { assignment: assignment }
        },
        None => {
            tracing::debug!(id = ?id, "assignment not found");
            rsx! {
                PageHeader { title: "Assignment" }
                Alert { variant: AlertVariant::Info, "That assignment could not be found." }
                Link { to: Route::StudentAssignments {}, "Back to assignments" }
            }
        }
    }
}
