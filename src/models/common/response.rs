use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::error;
use ts_rs::TS;

use crate::errors::MarkFeedError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 将错误转换为 HTTP 响应
    ///
    /// 服务端错误（存储、报表生成）只记录详情，调用方只看到通用消息。
    pub fn from_error(err: &MarkFeedError, code: ErrorCode) -> HttpResponse {
        if err.status_code().is_server_error() {
            error!("{} [{}]", err.format_simple(), err.code());
        }

        HttpResponse::build(err.status_code())
            .json(Self::error_empty(code, err.public_message()))
    }
}

impl From<&MarkFeedError> for ErrorCode {
    fn from(err: &MarkFeedError) -> Self {
        match err {
            MarkFeedError::Validation(_) => ErrorCode::BadRequest,
            MarkFeedError::NotFound(_) => ErrorCode::NotFound,
            MarkFeedError::InvalidFormat(_) => ErrorCode::ExportFormatInvalid,
            MarkFeedError::Authentication(_) => ErrorCode::Unauthorized,
            MarkFeedError::Authorization(_) => ErrorCode::Forbidden,
            MarkFeedError::Conflict(_) => ErrorCode::Conflict,
            MarkFeedError::ReportGeneration(_) => ErrorCode::ExportFailed,
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_storage_error_hides_detail() {
        let err = MarkFeedError::database_operation("deadlock on table feedback");
        let resp = ApiResponse::from_error(&err, ErrorCode::from(&err));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Internal server error");
        assert_eq!(json["code"], ErrorCode::InternalServerError as i32);
        assert!(json.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_client_errors_keep_message() {
        let err = MarkFeedError::invalid_format("Invalid format specified. Use either \"xlsx\" or \"csv\".");
        let resp = ApiResponse::from_error(&err, ErrorCode::from(&err));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "Invalid format specified. Use either \"xlsx\" or \"csv\"."
        );
        assert_eq!(json["code"], ErrorCode::ExportFormatInvalid as i32);
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ErrorCode::from(&MarkFeedError::not_found("x")),
            ErrorCode::NotFound
        );
        assert_eq!(
            ErrorCode::from(&MarkFeedError::database_connection("x")),
            ErrorCode::InternalServerError
        );
    }
}
