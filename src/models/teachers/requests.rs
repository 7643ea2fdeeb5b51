use serde::Deserialize;
use ts_rs::TS;

// 更新教师资料请求，只修改提供的字段
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub profile_pic: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub subject: Option<String>,
    pub address: Option<String>,
}

// 保存记事本请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct NotepadRequest {
    #[serde(default)]
    pub notepad: String,
}
