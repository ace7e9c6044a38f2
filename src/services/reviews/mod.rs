pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::{
    entities::ReviewStatus,
    requests::{CreateReviewRequest, ReviewListParams, UpdateReviewRequest},
};
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
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

    pub async fn list_reviews(
        &self,
        query: ReviewListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews(self, query, request).await
    }

    pub async fn get_review_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_review_stats(self, request).await
    }

    pub async fn create_review(
        &self,
        review_data: CreateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_review(self, review_data, request).await
    }

    pub async fn get_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_review(self, review_id, request).await
    }

    pub async fn update_review(
        &self,
        review_id: i64,
        update_data: UpdateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_review(self, review_id, update_data, request).await
    }

    pub async fn delete_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_review(self, review_id, request).await
    }

    // 审核：发布、待审或标记
    pub async fn set_review_status(
        &self,
        review_id: i64,
        status: ReviewStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::set_review_status(self, review_id, status, request).await
    }
}
