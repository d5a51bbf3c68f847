//! 成绩查询与名册导出
//!
//! 流程：查询层取回带类型的行 -> 计算百分比 -> 渲染为 JSON/XLSX/CSV -> 写出响应。

pub mod export;
pub mod report;
pub mod score;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub use export::roster_export;
pub use student::student_marks;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn get_student_marks(
        &self,
        request: &HttpRequest,
        module_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        student::get_student_marks(self, request, module_id, user_id).await
    }

    pub async fn export_marks(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        format: &str,
    ) -> ActixResult<HttpResponse> {
        export::export_marks(self, request, assignment_id, format).await
    }
}
