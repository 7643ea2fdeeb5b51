use serde::Deserialize;
use ts_rs::TS;

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coordinator_name: String,
    pub coordinator_phone: Option<String>,
}

// 更新班级请求，改名会同步到所有冗余存储的班级名称
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub coordinator_name: Option<String>,
    pub coordinator_phone: Option<String>,
}
