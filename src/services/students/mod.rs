pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::{
    entities::StudentStatus,
    requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn get_student_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_student_stats(self, request).await
    }

    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    // Active <-> Inactive 切换
    pub async fn toggle_student_status(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::toggle_student_status(self, student_id, request).await
    }

    // 直接设置为指定状态
    pub async fn set_student_status(
        &self,
        student_id: i64,
        status: StudentStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::set_student_status(self, student_id, status, request).await
    }
}
