use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::errors::{MarkFeedError, Result};
use crate::middlewares::RequireJWT;
use crate::models::feedback::entities::Feedback;
use crate::models::feedback::requests::CreateFeedbackRequest;
use crate::models::feedback::responses::FeedbackCreatedResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 为提交添加反馈，每个提交最多一条
pub async fn create_feedback(
    storage: &dyn Storage,
    req: CreateFeedbackRequest,
) -> Result<Feedback> {
    let new_feedback = req.validate()?;

    if !storage.submission_exists(new_feedback.submission_id).await? {
        return Err(MarkFeedError::not_found("Submission not found"));
    }

    if storage
        .get_feedback_by_submission_id(new_feedback.submission_id)
        .await?
        .is_some()
    {
        return Err(MarkFeedError::conflict(
            "Feedback already exists for this submission",
        ));
    }

    storage.create_feedback(new_feedback).await
}

/// POST /v1/feedback
pub async fn add_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    mut req: CreateFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 未指定评分人时记为当前用户
    if req.user_id.is_none() {
        req.user_id = RequireJWT::extract_user_id(request);
    }

    match create_feedback(storage.as_ref(), req).await {
        Ok(feedback) => {
            info!(
                "Feedback {} added to submission {}",
                feedback.id, feedback.submission_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FeedbackCreatedResponse {
                    feedback_id: feedback.id,
                },
                "Feedback added successfully",
            )))
        }
        Err(e) => {
            let code = match &e {
                MarkFeedError::Validation(_) => ErrorCode::FeedbackInvalid,
                MarkFeedError::NotFound(_) => ErrorCode::SubmissionNotFound,
                MarkFeedError::Conflict(_) => ErrorCode::FeedbackAlreadyExists,
                other => ErrorCode::from(other),
            };
            Ok(ApiResponse::from_error(&e, code))
        }
    }
}
