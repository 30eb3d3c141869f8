use serde::{Deserialize, Serialize};

/// An assignment as handed to the assignment views.
///
/// The client does not validate or mutate these; they are passed through to
/// the view exactly as supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub assigned_by: String,
    pub due_by: String,
    pub content: String,
    /// Attached file names, in upload order.
    #[serde(default)]
    pub filenames: Vec<String>,
    pub estimated_time: String,
    /// Submission references, in submission order.
    #[serde(default)]
    pub submissions: Vec<String>,
}

impl Assignment {
    pub fn has_attachments(&self) -> bool {
        !self.filenames.is_empty()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }
}
