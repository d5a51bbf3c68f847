//! 服务层测试用的内存存储替身

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::Storage;
use crate::errors::{MarkFeedError, Result};
use crate::models::feedback::entities::{Feedback, FeedbackChanges, NewFeedback};
use crate::models::marks::entities::{RosterRow, StudentMarkRow};

#[derive(Default)]
pub(crate) struct StubStorage {
    pub student_rows: Vec<StudentMarkRow>,
    pub roster_rows: Vec<RosterRow>,
    pub submissions: Vec<i64>,
    pub feedback: Mutex<Vec<Feedback>>,
    pub fail_queries: bool,
    pub queries: AtomicUsize,
}

impl StubStorage {
    pub fn with_roster(rows: Vec<RosterRow>) -> Self {
        Self {
            roster_rows: rows,
            ..Default::default()
        }
    }

    pub fn with_student_rows(rows: Vec<StudentMarkRow>) -> Self {
        Self {
            student_rows: rows,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_queries: true,
            ..Default::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn record_query(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries {
            return Err(MarkFeedError::database_connection(
                "pool timed out while waiting for an open connection",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for StubStorage {
    async fn list_student_marks(
        &self,
        _module_id: i64,
        _user_id: i64,
    ) -> Result<Vec<StudentMarkRow>> {
        self.record_query()?;
        Ok(self.student_rows.clone())
    }

    async fn list_roster_marks(&self, _assignment_id: i64) -> Result<Vec<RosterRow>> {
        self.record_query()?;
        Ok(self.roster_rows.clone())
    }

    async fn submission_exists(&self, submission_id: i64) -> Result<bool> {
        self.record_query()?;
        Ok(self.submissions.contains(&submission_id))
    }

    async fn get_feedback_by_submission_id(
        &self,
        submission_id: i64,
    ) -> Result<Option<Feedback>> {
        self.record_query()?;
        let feedback = self.feedback.lock().unwrap();
        Ok(feedback
            .iter()
            .find(|f| f.submission_id == submission_id)
            .cloned())
    }

    async fn create_feedback(&self, new: NewFeedback) -> Result<Feedback> {
        self.record_query()?;
        let mut feedback = self.feedback.lock().unwrap();
        let now = chrono::Utc::now();
        let created = Feedback {
            id: feedback.len() as i64 + 1,
            submission_id: new.submission_id,
            user_id: new.user_id,
            comment: new.comment,
            mark: new.mark,
            created_at: now,
            updated_at: now,
        };
        feedback.push(created.clone());
        Ok(created)
    }

    async fn update_feedback(
        &self,
        feedback_id: i64,
        changes: FeedbackChanges,
    ) -> Result<Option<Feedback>> {
        self.record_query()?;
        let mut feedback = self.feedback.lock().unwrap();
        Ok(feedback.iter_mut().find(|f| f.id == feedback_id).map(|f| {
            f.comment = changes.comment;
            f.mark = changes.mark;
            f.clone()
        }))
    }

    async fn delete_feedback(&self, feedback_id: i64) -> Result<bool> {
        self.record_query()?;
        let mut feedback = self.feedback.lock().unwrap();
        let before = feedback.len();
        feedback.retain(|f| f.id != feedback_id);
        Ok(feedback.len() != before)
    }
}
