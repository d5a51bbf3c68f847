use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生成绩条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "marks.ts")]
pub struct StudentMarkItem {
    #[serde(rename = "assignName")]
    pub assign_name: String,
    #[serde(rename = "markFormatted")]
    pub mark_formatted: String,
    pub comment: String,
}

/// 学生某模块的成绩列表，包裹在 `feedback` 字段中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "marks.ts")]
pub struct StudentMarksResponse {
    pub feedback: Vec<StudentMarkItem>,
}
