use serde::Deserialize;
use ts_rs::TS;

// 布置作业请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub due_date: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub created_at: Option<String>,
}
