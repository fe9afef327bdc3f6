use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    lessons::{entities::Lesson, requests::UpdateLessonRequest},
};
use crate::services::guards::{
    GuardResult, current_user, require_author, require_existed, stored, validated,
};
use crate::storage::Storage;
use crate::utils::validate::validate_not_blank;

pub struct LessonService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    async fn load_lesson(&self, lesson_id: &str, request: &HttpRequest) -> GuardResult<Lesson> {
        require_existed(
            self.get_storage(request).get_lesson_by_id(lesson_id).await,
            ErrorCode::LessonNotFound,
            "Lesson",
        )
    }

    async fn load_own_lesson(&self, lesson_id: &str, request: &HttpRequest) -> GuardResult<Lesson> {
        let user = current_user(request)?;
        let lesson = self.load_lesson(lesson_id, request).await?;
        require_author(&lesson, &user)?;
        Ok(lesson)
    }

    pub async fn get_lesson(&self, lesson_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let lesson = guard!(self.load_lesson(lesson_id, request).await);
        Ok(HttpResponse::Ok().json(lesson))
    }

    pub async fn update_lesson(
        &self,
        lesson_id: &str,
        data: UpdateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guard!(self.load_own_lesson(lesson_id, request).await);

        if let Some(title) = &data.title {
            guard!(validated(
                validate_not_blank("title", title),
                ErrorCode::ValidationFailed,
            ));
        }

        guard!(require_existed(
            self.get_storage(request).update_lesson(lesson_id, data).await,
            ErrorCode::LessonNotFound,
            "Lesson",
        ));

        Ok(HttpResponse::Ok().json(Detail::new("Updated")))
    }

    pub async fn delete_lesson(
        &self,
        lesson_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guard!(self.load_own_lesson(lesson_id, request).await);

        guard!(stored(
            self.get_storage(request).delete_lesson(lesson_id).await,
            "Failed to delete lesson",
        ));

        Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
    }
}
