use serde::Deserialize;
use ts_rs::TS;

use super::entities::{FeedbackChanges, NewFeedback};
use crate::errors::{MarkFeedError, Result};

/// 评语最大字符数，与 Excel 单元格上限一致
pub const MAX_COMMENT_CHARS: usize = 32_767;

fn check_comment_length(comment: &str) -> Result<()> {
    if comment.chars().count() > MAX_COMMENT_CHARS {
        return Err(MarkFeedError::validation(format!(
            "Comment must be at most {MAX_COMMENT_CHARS} characters"
        )));
    }
    Ok(())
}

// 创建反馈请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct CreateFeedbackRequest {
    #[serde(rename = "submissionID")]
    pub submission_id: Option<i64>,
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    pub comment: Option<String>,
    pub mark: Option<f64>,
}

impl CreateFeedbackRequest {
    pub fn validate(self) -> Result<NewFeedback> {
        let error = || MarkFeedError::validation("Submission ID, comment, and mark are required");

        let submission_id = self.submission_id.filter(|id| *id > 0).ok_or_else(error)?;
        let comment = self
            .comment
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(error)?;
        check_comment_length(&comment)?;
        let mark = self.mark.ok_or_else(error)?;
        if !mark.is_finite() {
            return Err(MarkFeedError::validation("Mark must be a finite number"));
        }

        Ok(NewFeedback {
            submission_id,
            user_id: self.user_id,
            comment,
            mark,
        })
    }
}

// 更新反馈请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct UpdateFeedbackRequest {
    pub comment: Option<String>,
    pub mark: Option<f64>,
}

impl UpdateFeedbackRequest {
    pub fn validate(self) -> Result<FeedbackChanges> {
        let error = || MarkFeedError::validation("Comment and mark are required");

        let comment = self
            .comment
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(error)?;
        check_comment_length(&comment)?;
        let mark = self.mark.ok_or_else(error)?;
        if !mark.is_finite() {
            return Err(MarkFeedError::validation("Mark must be a finite number"));
        }

        Ok(FeedbackChanges { comment, mark })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_uses_wire_names() {
        let req: CreateFeedbackRequest = serde_json::from_str(
            r#"{"submissionID": 4, "userID": 9, "comment": "Good pacing", "mark": 7.5}"#,
        )
        .unwrap();
        let feedback = req.validate().unwrap();
        assert_eq!(feedback.submission_id, 4);
        assert_eq!(feedback.user_id, Some(9));
        assert_eq!(feedback.comment, "Good pacing");
        assert_eq!(feedback.mark, 7.5);
    }

    #[test]
    fn test_create_request_requires_fields() {
        let missing_mark: CreateFeedbackRequest =
            serde_json::from_str(r#"{"submissionID": 4, "comment": "ok"}"#).unwrap();
        assert!(matches!(
            missing_mark.validate(),
            Err(MarkFeedError::Validation(_))
        ));

        let blank_comment: CreateFeedbackRequest =
            serde_json::from_str(r#"{"submissionID": 4, "comment": "  ", "mark": 3}"#).unwrap();
        assert!(blank_comment.validate().is_err());

        let no_submission: CreateFeedbackRequest =
            serde_json::from_str(r#"{"comment": "ok", "mark": 3}"#).unwrap();
        assert!(no_submission.validate().is_err());
    }

    #[test]
    fn test_zero_mark_is_allowed() {
        let req: CreateFeedbackRequest =
            serde_json::from_str(r#"{"submissionID": 1, "comment": "Missing", "mark": 0}"#)
                .unwrap();
        assert_eq!(req.validate().unwrap().mark, 0.0);
    }

    #[test]
    fn test_update_request_requires_both_fields() {
        let req: UpdateFeedbackRequest = serde_json::from_str(r#"{"comment": "ok"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateFeedbackRequest =
            serde_json::from_str(r#"{"comment": "Better", "mark": 9}"#).unwrap();
        let changes = req.validate().unwrap();
        assert_eq!(changes.comment, "Better");
        assert_eq!(changes.mark, 9.0);
    }

    #[test]
    fn test_comment_length_is_capped() {
        let at_limit = CreateFeedbackRequest {
            submission_id: Some(2),
            user_id: None,
            comment: Some("a".repeat(MAX_COMMENT_CHARS)),
            mark: Some(5.0),
        };
        assert!(at_limit.validate().is_ok());

        let too_long = CreateFeedbackRequest {
            submission_id: Some(2),
            user_id: None,
            comment: Some("a".repeat(40_000)),
            mark: Some(5.0),
        };
        assert!(matches!(
            too_long.validate(),
            Err(MarkFeedError::Validation(msg)) if msg == "Comment must be at most 32767 characters"
        ));

        let update = UpdateFeedbackRequest {
            comment: Some("ü".repeat(MAX_COMMENT_CHARS + 1)),
            mark: Some(5.0),
        };
        assert!(matches!(update.validate(), Err(MarkFeedError::Validation(_))));
    }
}
