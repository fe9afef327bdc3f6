pub mod lessons;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    PaginationQuery, chapters::requests::UpdateChapterRequest,
    lessons::requests::CreateLessonRequest,
};
use crate::storage::Storage;

pub struct ChapterService {
    storage: Option<Arc<dyn Storage>>,
}

impl ChapterService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_chapter(&self, chapter_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::get_chapter(self, chapter_id, request).await
    }

    pub async fn update_chapter(
        &self,
        chapter_id: &str,
        data: UpdateChapterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_chapter(self, chapter_id, data, request).await
    }

    pub async fn delete_chapter(
        &self,
        chapter_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_chapter(self, chapter_id, request).await
    }

    pub async fn list_lessons(
        &self,
        chapter_id: &str,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::list_lessons(self, chapter_id, query, request).await
    }

    pub async fn create_lesson(
        &self,
        chapter_id: &str,
        data: CreateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::create_lesson(self, chapter_id, data, request).await
    }
}
