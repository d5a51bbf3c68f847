use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::errors::{MarkFeedError, Result};
use crate::models::feedback::entities::Feedback;
use crate::models::feedback::requests::UpdateFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn update_feedback(
    storage: &dyn Storage,
    feedback_id: i64,
    req: UpdateFeedbackRequest,
) -> Result<Feedback> {
    let changes = req.validate()?;

    storage
        .update_feedback(feedback_id, changes)
        .await?
        .ok_or_else(|| MarkFeedError::not_found("Feedback not found"))
}

/// PUT /v1/feedback/{feedback_id}
pub async fn edit_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    feedback_id: i64,
    req: UpdateFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match update_feedback(storage.as_ref(), feedback_id, req).await {
        Ok(feedback) => {
            info!("Feedback {} updated", feedback.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                feedback,
                "Feedback updated successfully",
            )))
        }
        Err(e) => {
            let code = match &e {
                MarkFeedError::Validation(_) => ErrorCode::FeedbackInvalid,
                MarkFeedError::NotFound(_) => ErrorCode::FeedbackNotFound,
                other => ErrorCode::from(other),
            };
            Ok(ApiResponse::from_error(&e, code))
        }
    }
}
