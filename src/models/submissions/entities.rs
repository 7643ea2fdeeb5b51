use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    #[serde(rename = "Not Submitted")]
    NotSubmitted,
    #[serde(rename = "Submitted")]
    Submitted,
    #[serde(rename = "Graded")]
    Graded,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::NotSubmitted => "Not Submitted",
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Graded => "Graded",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Not Submitted" => Some(SubmissionStatus::NotSubmitted),
            "Submitted" => Some(SubmissionStatus::Submitted),
            "Graded" => Some(SubmissionStatus::Graded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub file_url: String,
    pub submission_date: String,
    pub status: SubmissionStatus,
    pub grade: String,
    pub feedback: String,
}
