use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 反馈记录（每个提交最多一条）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct Feedback {
    pub id: i64,
    pub submission_id: i64,
    pub user_id: Option<i64>,
    pub comment: String,
    pub mark: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 校验后的新反馈
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub submission_id: i64,
    pub user_id: Option<i64>,
    pub comment: String,
    pub mark: f64,
}

/// 校验后的反馈修改
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackChanges {
    pub comment: String,
    pub mark: f64,
}
