//! 反馈记录的增删改

pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedback::requests::{CreateFeedbackRequest, UpdateFeedbackRequest};
use crate::storage::Storage;

pub use create::create_feedback;
pub use delete::delete_feedback;
pub use update::update_feedback;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    pub async fn add_feedback(
        &self,
        request: &HttpRequest,
        req: CreateFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        create::add_feedback(self, request, req).await
    }

    pub async fn edit_feedback(
        &self,
        request: &HttpRequest,
        feedback_id: i64,
        req: UpdateFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        update::edit_feedback(self, request, feedback_id, req).await
    }

    pub async fn remove_feedback(
        &self,
        request: &HttpRequest,
        feedback_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::remove_feedback(self, request, feedback_id).await
    }
}
