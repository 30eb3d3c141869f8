use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader};

use crate::fixtures::{placeholder_timetable, TimetableSlot};

/// Slots grouped by day, days in first-seen order.
pub fn group_by_day(slots: Vec<TimetableSlot>) -> Vec<(&'static str, Vec<TimetableSlot>)> {
    let mut days: Vec<(&'static str, Vec<TimetableSlot>)> = Vec::new();
    for slot in slots {
        match days.iter_mut().find(|(day, _)| *day == slot.day) {
            Some((_, group)) => group.push(slot),
            None => days.push((slot.day, vec![slot])),
        }
    }
    days
}

/// `/student/timetable`.
#[component]
pub fn TimetablePage() -> Element {
    let days = group_by_day(placeholder_timetable());

    rsx! {
        PageHeader { title: "Timetable", subtitle: "This week" }
        Card { class: "timetable",
            CardContent {
                for (day, slots) in days {
                    section { key: "{day}", class: "timetable-day",
                        h3 { "{day}" }
                        ol {
                            for slot in slots {
                                li { key: "{slot.period}",
                                    span { class: "timetable-period", "P{slot.period}" }
                                    span { class: "timetable-subject", "{slot.subject}" }
                                    span { class: "timetable-room", "{slot.room}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
