//! 成绩查询存储操作
//!
//! 两个查询均为内连接：没有反馈的提交不会出现在结果中。
//! 查询不排序，返回顺序即数据库的自然顺序。

use super::SeaOrmStorage;
use crate::entity::assignments::Column as AssignmentColumn;
use crate::entity::feedback::Column as FeedbackColumn;
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions, Relation};
use crate::entity::users::Column as UserColumn;
use crate::errors::{MarkFeedError, Result};
use crate::models::marks::entities::{RosterRow, StudentMarkRow};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

#[derive(Debug, FromQueryResult)]
struct StudentMarkQueryRow {
    assign_name: String,
    mark: f64,
    comment: String,
    total_marks: f64,
}

impl From<StudentMarkQueryRow> for StudentMarkRow {
    fn from(row: StudentMarkQueryRow) -> Self {
        StudentMarkRow {
            assign_name: row.assign_name,
            mark: row.mark,
            comment: row.comment,
            total_marks: row.total_marks,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RosterQueryRow {
    first_name: String,
    last_name: String,
    username: String,
    comment: String,
    mark: f64,
    total_marks: f64,
}

impl From<RosterQueryRow> for RosterRow {
    fn from(row: RosterQueryRow) -> Self {
        RosterRow {
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            comment: row.comment,
            mark: row.mark,
            total_marks: row.total_marks,
        }
    }
}

impl SeaOrmStorage {
    /// 查询学生在某模块下的成绩
    pub async fn list_student_marks_impl(
        &self,
        module_id: i64,
        user_id: i64,
    ) -> Result<Vec<StudentMarkRow>> {
        let rows = Submissions::find()
            .select_only()
            .column_as(AssignmentColumn::Name, "assign_name")
            .column_as(FeedbackColumn::Mark, "mark")
            .column_as(FeedbackColumn::Comment, "comment")
            .column_as(AssignmentColumn::TotalMarks, "total_marks")
            .join(JoinType::InnerJoin, Relation::Feedback.def())
            .join(JoinType::InnerJoin, Relation::Assignment.def())
            .filter(AssignmentColumn::ModuleId.eq(module_id))
            .filter(SubmissionColumn::UserId.eq(user_id))
            .into_model::<StudentMarkQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(rows.into_iter().map(StudentMarkRow::from).collect())
    }

    /// 查询某作业的成绩名册
    pub async fn list_roster_marks_impl(&self, assignment_id: i64) -> Result<Vec<RosterRow>> {
        let rows = Submissions::find()
            .select_only()
            .column_as(UserColumn::FirstName, "first_name")
            .column_as(UserColumn::LastName, "last_name")
            .column_as(UserColumn::Username, "username")
            .column_as(FeedbackColumn::Comment, "comment")
            .column_as(FeedbackColumn::Mark, "mark")
            .column_as(AssignmentColumn::TotalMarks, "total_marks")
            .join(JoinType::InnerJoin, Relation::Feedback.def())
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::InnerJoin, Relation::Assignment.def())
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .into_model::<RosterQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| MarkFeedError::database_operation(format!("查询成绩名册失败: {e}")))?;

        Ok(rows.into_iter().map(RosterRow::from).collect())
    }
}
