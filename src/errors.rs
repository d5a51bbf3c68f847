//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_markfeed_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum MarkFeedError {
            $($variant(String),)*
        }

        impl MarkFeedError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MarkFeedError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MarkFeedError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(MarkFeedError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MarkFeedError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl MarkFeedError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MarkFeedError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_markfeed_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E003", "Database Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E004", "Validation Error", BAD_REQUEST),
    NotFound("E005", "Resource Not Found", NOT_FOUND),
    InvalidFormat("E006", "Invalid Export Format", BAD_REQUEST),
    ReportGeneration("E007", "Report Generation Error", INTERNAL_SERVER_ERROR),
    Authentication("E008", "Authentication Error", UNAUTHORIZED),
    Authorization("E009", "Authorization Error", FORBIDDEN),
    Conflict("E010", "Resource Conflict", CONFLICT),
}

impl MarkFeedError {
    /// 是否属于存储层错误（详情只写日志，不返回给调用方）
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            MarkFeedError::DatabaseConfig(_)
                | MarkFeedError::DatabaseConnection(_)
                | MarkFeedError::DatabaseOperation(_)
        )
    }

    /// 返回给调用方的消息
    pub fn public_message(&self) -> &str {
        if self.status_code().is_server_error() {
            "Internal server error"
        } else {
            self.message()
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MarkFeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MarkFeedError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for MarkFeedError {
    fn from(err: sea_orm::DbErr) -> Self {
        MarkFeedError::DatabaseOperation(err.to_string())
    }
}

impl From<csv::Error> for MarkFeedError {
    fn from(err: csv::Error) -> Self {
        MarkFeedError::ReportGeneration(format!("CSV: {err}"))
    }
}

impl From<rust_xlsxwriter::XlsxError> for MarkFeedError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        MarkFeedError::ReportGeneration(format!("XLSX: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, MarkFeedError>;
