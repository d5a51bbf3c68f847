use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::MarkService;
use super::report::build_student_marks;
use crate::errors::{MarkFeedError, Result};
use crate::middlewares::RequireJWT;
use crate::models::marks::responses::StudentMarksResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 查询学生在某模块下的全部已评分作业
///
/// 没有任何记录时返回 `NotFound`。
pub async fn student_marks(
    storage: &dyn Storage,
    module_id: i64,
    user_id: i64,
) -> Result<StudentMarksResponse> {
    let rows = storage.list_student_marks(module_id, user_id).await?;
    if rows.is_empty() {
        return Err(MarkFeedError::not_found(
            "No marks found for the specified moduleID and userID",
        ));
    }

    debug!(
        "Loaded {} marks for module {} and user {}",
        rows.len(),
        module_id,
        user_id
    );
    Ok(build_student_marks(&rows))
}

/// GET /v1/feedback/marks/{module_id}/{user_id}
pub async fn get_student_marks(
    service: &MarkService,
    request: &HttpRequest,
    module_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        let e = MarkFeedError::authentication("Authentication required");
        return Ok(ApiResponse::from_error(&e, ErrorCode::from(&e)));
    };

    // 学生只能查看自己的成绩
    if !current_user.role.is_staff() && current_user.id != user_id {
        let e = MarkFeedError::authorization("You can only view your own marks");
        return Ok(ApiResponse::from_error(&e, ErrorCode::from(&e)));
    }

    let storage = service.get_storage(request);
    match student_marks(storage.as_ref(), module_id, user_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(MarkFeedError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::MarksNotFound, msg))),
        Err(e) => Ok(ApiResponse::from_error(&e, ErrorCode::from(&e))),
    }
}
