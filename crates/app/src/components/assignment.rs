use dioxus::prelude::*;
use shared_types::Assignment;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

/// Full view of one assignment. Renders the fields exactly as given.
#[component]
pub fn AssignmentView(assignment: Assignment) -> Element {
    let submissions = assignment.submission_count();

    rsx! {
        article { class: "assignment-view", "data-assignment-id": "{assignment.id}",
            Card {
                CardHeader {
                    CardTitle { "{assignment.title}" }
                    Badge { variant: BadgeVariant::Secondary, "{assignment.assigned_to}" }
                }
                CardContent {
                    dl { class: "assignment-meta",
                        dt { "Set by" }
                        dd { "{assignment.assigned_by}" }
                        dt { "Due" }
                        dd { "{assignment.due_by}" }
                        dt { "Estimated time" }
                        dd { "{assignment.estimated_time}" }
                        dt { "Submissions" }
                        dd { "{submissions}" }
                    }
                    p { class: "assignment-content", "{assignment.content}" }
                    if assignment.has_attachments() {
                        ul { class: "assignment-files",
                            for name in assignment.filenames.iter() {
                                li { key: "{name}", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Compact row linking to an assignment.
#[component]
pub fn AssignmentSummary(assignment: Assignment, children: Element) -> Element {
    rsx! {
        Card { class: "assignment-summary",
            CardHeader {
                CardTitle { "{assignment.title}" }
            }
            CardContent {
                p { class: "assignment-due", "Due {assignment.due_by} \u{00b7} {assignment.estimated_time}" }
                {children}
            }
        }
    }
}
