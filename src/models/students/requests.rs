use serde::Deserialize;
use ts_rs::TS;

// 向班级添加学生请求，其余字段默认为空
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll: String,
}

// 更新学生请求，只修改提供的字段
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub roll: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub phone: Option<String>,
    pub parent_phone: Option<String>,
    pub parent_email: Option<String>,
    pub address: Option<String>,
    pub previous_marks: Option<String>,
    pub profile_pic: Option<String>,
}

// 保存学生备注请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentNotesRequest {
    #[serde(default)]
    pub notes: String,
}
