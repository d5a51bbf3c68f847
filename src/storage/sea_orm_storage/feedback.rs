//! 反馈存储操作

use super::SeaOrmStorage;
use crate::entity::feedback::{ActiveModel, Column, Entity as FeedbackEntity};
use crate::entity::submissions::Entity as Submissions;
use crate::errors::{MarkFeedError, Result};
use crate::models::feedback::entities::{Feedback, FeedbackChanges, NewFeedback};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
};

impl SeaOrmStorage {
    /// 检查提交是否存在
    pub async fn submission_exists_impl(&self, submission_id: i64) -> Result<bool> {
        let result = Submissions::find_by_id(submission_id)
            .count(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result > 0)
    }

    /// 通过 ID 获取反馈
    async fn get_feedback_by_id_impl(&self, feedback_id: i64) -> Result<Option<Feedback>> {
        let result = FeedbackEntity::find_by_id(feedback_id)
            .one(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("查询反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    /// 通过提交 ID 获取反馈
    pub async fn get_feedback_by_submission_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Feedback>> {
        let result = FeedbackEntity::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("查询反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    /// 创建反馈
    pub async fn create_feedback_impl(&self, req: NewFeedback) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            submission_id: Set(req.submission_id),
            user_id: Set(req.user_id),
            comment: Set(req.comment),
            mark: Set(req.mark),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 每个提交只能有一条反馈，并发插入由唯一索引兜底
        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                MarkFeedError::conflict("Feedback already exists for this submission")
            }
            _ => MarkFeedError::database_operation(format!("创建反馈失败: {e}")),
        })?;

        Ok(result.into_feedback())
    }

    /// 更新反馈
    pub async fn update_feedback_impl(
        &self,
        feedback_id: i64,
        changes: FeedbackChanges,
    ) -> Result<Option<Feedback>> {
        // 先检查反馈是否存在
        if self.get_feedback_by_id_impl(feedback_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(feedback_id),
            comment: Set(changes.comment),
            mark: Set(changes.mark),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("更新反馈失败: {e}")))?;

        Ok(Some(updated.into_feedback()))
    }

    /// 删除反馈
    pub async fn delete_feedback_impl(&self, feedback_id: i64) -> Result<bool> {
        let result = FeedbackEntity::delete_by_id(feedback_id)
            .exec(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("删除反馈失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
