use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChapterService;
use super::manage::{load_chapter, load_own_chapter};
use crate::guard;
use crate::models::{Detail, ErrorCode, PaginationQuery, lessons::requests::CreateLessonRequest};
use crate::services::guards::{stored, validated};
use crate::utils::validate::validate_not_blank;

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_lessons(
    service: &ChapterService,
    chapter_id: &str,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let chapter = guard!(load_chapter(&storage, chapter_id).await);

    let lessons = guard!(stored(
        storage
            .list_lessons_by_chapter_id(&chapter.id, query.page(DEFAULT_LIMIT))
            .await,
        "Failed to list lessons",
    ));

    Ok(HttpResponse::Ok().json(lessons))
}

/// 课时的作者继承自章节作者
pub async fn create_lesson(
    service: &ChapterService,
    chapter_id: &str,
    data: CreateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let chapter = guard!(load_own_chapter(&storage, chapter_id, request).await);

    guard!(validated(
        validate_not_blank("title", &data.title),
        ErrorCode::ValidationFailed,
    ));

    let lesson = guard!(stored(
        storage
            .create_lesson(&chapter.id, &chapter.author_id, data)
            .await,
        "Failed to create lesson",
    ));

    Ok(HttpResponse::Created().json(Detail::new(lesson.id)))
}
