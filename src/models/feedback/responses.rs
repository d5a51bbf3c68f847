use serde::Serialize;
use ts_rs::TS;

/// 创建反馈响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct FeedbackCreatedResponse {
    #[serde(rename = "feedbackID")]
    pub feedback_id: i64,
}
