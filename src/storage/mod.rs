use std::sync::Arc;

use crate::models::{
    feedback::entities::{Feedback, FeedbackChanges, NewFeedback},
    marks::entities::{RosterRow, StudentMarkRow},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[cfg(test)]
pub(crate) mod test_support;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 成绩查询方法（每次调用只发出一条只读查询）
    // 学生在某模块下已评分的作业（仅包含有反馈的提交）
    async fn list_student_marks(&self, module_id: i64, user_id: i64)
    -> Result<Vec<StudentMarkRow>>;
    // 某作业的全部已评分提交及学生信息
    async fn list_roster_marks(&self, assignment_id: i64) -> Result<Vec<RosterRow>>;

    /// 反馈管理方法
    // 检查提交是否存在
    async fn submission_exists(&self, submission_id: i64) -> Result<bool>;
    // 通过提交ID获取反馈
    async fn get_feedback_by_submission_id(&self, submission_id: i64)
    -> Result<Option<Feedback>>;
    // 创建反馈
    async fn create_feedback(&self, feedback: NewFeedback) -> Result<Feedback>;
    // 更新反馈
    async fn update_feedback(
        &self,
        feedback_id: i64,
        changes: FeedbackChanges,
    ) -> Result<Option<Feedback>>;
    // 删除反馈
    async fn delete_feedback(&self, feedback_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
