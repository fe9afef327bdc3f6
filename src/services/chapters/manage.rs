use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::ChapterService;
use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    chapters::{entities::Chapter, requests::UpdateChapterRequest},
};
use crate::services::guards::{
    GuardResult, current_user, require_author, require_existed, stored, validated,
};
use crate::storage::Storage;
use crate::utils::validate::validate_not_blank;

pub(crate) async fn load_chapter(
    storage: &Arc<dyn Storage>,
    chapter_id: &str,
) -> GuardResult<Chapter> {
    require_existed(
        storage.get_chapter_by_id(chapter_id).await,
        ErrorCode::ChapterNotFound,
        "Chapter",
    )
}

pub(crate) async fn load_own_chapter(
    storage: &Arc<dyn Storage>,
    chapter_id: &str,
    request: &HttpRequest,
) -> GuardResult<Chapter> {
    let user = current_user(request)?;
    let chapter = load_chapter(storage, chapter_id).await?;
    require_author(&chapter, &user)?;
    Ok(chapter)
}

pub async fn get_chapter(
    service: &ChapterService,
    chapter_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let chapter = guard!(load_chapter(&storage, chapter_id).await);
    Ok(HttpResponse::Ok().json(chapter))
}

/// 更新章节，返回更新后的章节
pub async fn update_chapter(
    service: &ChapterService,
    chapter_id: &str,
    data: UpdateChapterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    guard!(load_own_chapter(&storage, chapter_id, request).await);

    if let Some(title) = &data.title {
        guard!(validated(
            validate_not_blank("title", title),
            ErrorCode::ValidationFailed,
        ));
    }

    let chapter = guard!(require_existed(
        storage.update_chapter(chapter_id, data).await,
        ErrorCode::ChapterNotFound,
        "Chapter",
    ));

    Ok(HttpResponse::Ok().json(chapter))
}

pub async fn delete_chapter(
    service: &ChapterService,
    chapter_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    guard!(load_own_chapter(&storage, chapter_id, request).await);

    guard!(stored(
        storage.delete_chapter(chapter_id).await,
        "Failed to delete chapter",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
}
