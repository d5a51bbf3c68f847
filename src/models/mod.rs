//! 数据模型定义
//!
//! - `common`: 通用响应结构
//! - `feedback`: 反馈记录及其请求/响应
//! - `marks`: 成绩查询行与导出相关类型
//! - `users`: 认证用户与角色

pub mod common;
pub mod feedback;
pub mod marks;
pub mod users;

pub use common::response::ApiResponse;

use serde::Serialize;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 成绩导出
    MarksNotFound = 2001,
    ExportFormatInvalid = 2002,
    ExportFailed = 2003,

    // 反馈
    FeedbackNotFound = 3001,
    FeedbackAlreadyExists = 3002,
    FeedbackInvalid = 3003,
    SubmissionNotFound = 3004,
}
