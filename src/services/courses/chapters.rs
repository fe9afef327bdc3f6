use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::manage::{load_course, load_own_course};
use crate::guard;
use crate::models::{
    Detail, ErrorCode, PaginationQuery, chapters::requests::CreateChapterRequest,
};
use crate::services::guards::{stored, validated};
use crate::utils::validate::validate_not_blank;

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_chapters(
    service: &CourseService,
    course_id: &str,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    let chapters = guard!(stored(
        storage
            .list_chapters_by_course_id(&course.id, query.page(DEFAULT_LIMIT))
            .await,
        "Failed to list chapters",
    ));

    Ok(HttpResponse::Ok().json(chapters))
}

/// 章节的作者继承自课程作者
pub async fn create_chapter(
    service: &CourseService,
    course_id: &str,
    data: CreateChapterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_own_course(&storage, course_id, request).await);

    guard!(validated(
        validate_not_blank("title", &data.title),
        ErrorCode::ValidationFailed,
    ));

    let chapter = guard!(stored(
        storage
            .create_chapter(&course.id, &course.author_id, data)
            .await,
        "Failed to create chapter",
    ));

    Ok(HttpResponse::Created().json(Detail::new(chapter.id)))
}
