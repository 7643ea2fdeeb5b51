use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    // "All Classes" 或班级名称
    pub class_name: String,
    pub due_date: String,
    pub description: String,
    pub file_url: String,
    pub created_at: String,
}
