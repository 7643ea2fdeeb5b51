use serde::Serialize;
use ts_rs::TS;

use super::entities::Assignment;

/// 作业列表项，附带是否逾期
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub overdue: bool,
}

/// 布置作业结果：作业本身、生成的通知文本与成功发送的邮件数
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCreatedResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub notification_message: String,
    pub emails_sent: usize,
}
