//! 安全的路径参数提取器
//!
//! 按参数名从路由中读取 ID，并校验为正整数。校验失败时直接返回
//! 400 `ApiResponse`，处理程序不会被调用。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use super::validate::validate_id;
use crate::errors::MarkFeedError;
use crate::models::{ApiResponse, ErrorCode};

fn extract_id(req: &HttpRequest, param: &str, label: &str) -> Result<i64, actix_web::Error> {
    validate_id(req.match_info().get(param), label).map_err(into_bad_request)
}

fn into_bad_request(err: MarkFeedError) -> actix_web::Error {
    let response = ApiResponse::from_error(&err, ErrorCode::BadRequest);
    InternalError::from_response(err, response).into()
}

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(extract_id(req, $param, $label).map($name))
            }
        }
    };
}

define_safe_id_extractor!(SafeModuleIdI64, "module_id", "moduleID");
define_safe_id_extractor!(SafeUserIdI64, "user_id", "userID");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id", "assignmentID");
define_safe_id_extractor!(SafeFeedbackIdI64, "feedback_id", "feedbackID");
