pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod toggle;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    pub async fn get_course_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_course_stats(self, request).await
    }

    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    // Published <-> Draft 切换
    pub async fn toggle_course_status(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_course_status(self, course_id, request).await
    }
}
