use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::errors::{MarkFeedError, Result};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn delete_feedback(storage: &dyn Storage, feedback_id: i64) -> Result<()> {
    if storage.delete_feedback(feedback_id).await? {
        Ok(())
    } else {
        Err(MarkFeedError::not_found("Feedback not found"))
    }
}

/// DELETE /v1/feedback/{feedback_id}
pub async fn remove_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    feedback_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match delete_feedback(storage.as_ref(), feedback_id).await {
        Ok(()) => {
            info!("Feedback {} deleted", feedback_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Feedback deleted successfully")))
        }
        Err(MarkFeedError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::FeedbackNotFound, msg))),
        Err(e) => Ok(ApiResponse::from_error(&e, ErrorCode::from(&e))),
    }
}
