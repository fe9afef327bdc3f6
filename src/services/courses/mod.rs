pub mod chapters;
pub mod enrollments;
pub mod feedbacks;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    PaginationQuery,
    chapters::requests::CreateChapterRequest,
    courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
    enrollments::requests::EnrollmentSearchParams,
    feedbacks::requests::CreateFeedbackRequest,
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
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 课程列表
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_course(self, data, request).await
    }

    pub async fn get_course(&self, course_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::get_course(self, course_id, request).await
    }

    pub async fn update_course(
        &self,
        course_id: &str,
        data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_course(self, course_id, data, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_course(self, course_id, request).await
    }

    // 章节
    pub async fn list_chapters(
        &self,
        course_id: &str,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chapters::list_chapters(self, course_id, query, request).await
    }

    pub async fn create_chapter(
        &self,
        course_id: &str,
        data: CreateChapterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chapters::create_chapter(self, course_id, data, request).await
    }

    // 选课
    pub async fn enroll(&self, course_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollments::enroll(self, course_id, request).await
    }

    pub async fn unenroll(&self, course_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollments::unenroll(self, course_id, request).await
    }

    pub async fn list_students(
        &self,
        course_id: &str,
        query: EnrollmentSearchParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollments::list_students(self, course_id, query, request).await
    }

    // 评价
    pub async fn list_feedbacks(
        &self,
        course_id: &str,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feedbacks::list_feedbacks(self, course_id, query, request).await
    }

    pub async fn create_feedback(
        &self,
        course_id: &str,
        data: CreateFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feedbacks::create_feedback(self, course_id, data, request).await
    }

    pub async fn get_rating(&self, course_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        feedbacks::get_rating(self, course_id, request).await
    }
}
