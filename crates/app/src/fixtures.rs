//! Placeholder content for the student and teacher views until the
//! assignment and timetable services are wired in.

use shared_types::Assignment;

/// One row of the weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableSlot {
    pub day: &'static str,
    pub period: u8,
    pub subject: &'static str,
    pub room: &'static str,
}

pub fn placeholder_timetable() -> Vec<TimetableSlot> {
    const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
    const SUBJECTS: [(&str, &str); 4] = [
        ("Mathematics", "B12"),
        ("English", "A03"),
        ("Physics", "Lab 2"),
        ("History", "C07"),
    ];

    DAYS.into_iter()
        .enumerate()
        .flat_map(|(d, day)| {
            (0..SUBJECTS.len()).map(move |p| {
                let (subject, room) = SUBJECTS[(d + p) % SUBJECTS.len()];
                TimetableSlot {
                    day,
                    period: p as u8 + 1,
                    subject,
                    room,
                }
            })
        })
        .collect()
}

pub fn placeholder_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "4f1c2a9e".into(),
            title: "Quadratic equations worksheet".into(),
            assigned_to: "10B Mathematics".into(),
            assigned_by: "Ms. Hopper".into(),
            due_by: "Friday 17:00".into(),
            content: "Complete questions 1-20. Show your working for every question.".into(),
            filenames: vec!["worksheet.pdf".into()],
            estimated_time: "45 minutes".into(),
            submissions: Vec::new(),
        },
        Assignment {
            id: "9b7d0e13".into(),
            title: "Persuasive essay draft".into(),
            assigned_to: "10B English".into(),
            assigned_by: "Mr. Turing".into(),
            due_by: "Monday 09:00".into(),
            content: "Write a 600 word persuasive essay on a topic of your choice.".into(),
            filenames: vec!["rubric.pdf".into(), "example-essay.docx".into()],
            estimated_time: "2 hours".into(),
            submissions: vec!["sub-0192".into()],
        },
        Assignment {
            id: "c3e58b70".into(),
            title: "Pendulum lab report".into(),
            assigned_to: "10B Physics".into(),
            assigned_by: "Dr. Curie".into(),
            due_by: "Wednesday 15:30".into(),
            content: "Write up the pendulum experiment using the lab report template.".into(),
            filenames: Vec::new(),
            estimated_time: "1 hour".into(),
            submissions: Vec::new(),
        },
    ]
}

pub fn find_assignment(id: &str) -> Option<Assignment> {
    placeholder_assignments().into_iter().find(|a| a.id == id)
}
