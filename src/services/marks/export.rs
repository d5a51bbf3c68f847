use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MarkService;
use super::report::render_roster;
use crate::errors::{MarkFeedError, Result};
use crate::models::marks::entities::{ExportFile, ExportFormat};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 导出作业名册
///
/// 先解析格式，格式无效时不访问存储。
pub async fn roster_export(
    storage: &dyn Storage,
    assignment_id: i64,
    format: &str,
) -> Result<ExportFile> {
    let format: ExportFormat = format.parse()?;

    let rows = storage.list_roster_marks(assignment_id).await?;
    if rows.is_empty() {
        return Err(MarkFeedError::not_found(
            "No data found for the given assignment.",
        ));
    }

    let row_count = rows.len();
    let file = render_roster(rows, format)?;
    info!(
        "Exported {} rows for assignment {} as {} ({} bytes)",
        row_count,
        assignment_id,
        format,
        file.bytes.len()
    );
    Ok(file)
}

/// GET /v1/feedback/download/{assignment_id}/{format}
pub async fn export_marks(
    service: &MarkService,
    request: &HttpRequest,
    assignment_id: i64,
    format: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match roster_export(storage.as_ref(), assignment_id, format).await {
        Ok(file) => Ok(HttpResponse::Ok()
            .content_type(file.format.content_type())
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename={}", file.format.file_name()),
            ))
            .body(file.bytes)),
        Err(e) => Ok(ApiResponse::from_error(&e, ErrorCode::from(&e))),
    }
}
