use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::chapters::requests::UpdateChapterRequest;
use crate::models::lessons::requests::CreateLessonRequest;
use crate::services::ChapterService;
use crate::utils::SafeId;

static CHAPTER_SERVICE: Lazy<ChapterService> = Lazy::new(ChapterService::new_lazy);

pub async fn get_chapter(req: HttpRequest, chapter_id: SafeId) -> ActixResult<HttpResponse> {
    CHAPTER_SERVICE.get_chapter(&chapter_id, &req).await
}

pub async fn update_chapter(
    req: HttpRequest,
    chapter_id: SafeId,
    data: web::Json<UpdateChapterRequest>,
) -> ActixResult<HttpResponse> {
    CHAPTER_SERVICE
        .update_chapter(&chapter_id, data.into_inner(), &req)
        .await
}

pub async fn delete_chapter(req: HttpRequest, chapter_id: SafeId) -> ActixResult<HttpResponse> {
    CHAPTER_SERVICE.delete_chapter(&chapter_id, &req).await
}

pub async fn list_lessons(
    req: HttpRequest,
    chapter_id: SafeId,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CHAPTER_SERVICE
        .list_lessons(&chapter_id, query.into_inner(), &req)
        .await
}

pub async fn create_lesson(
    req: HttpRequest,
    chapter_id: SafeId,
    data: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    CHAPTER_SERVICE
        .create_lesson(&chapter_id, data.into_inner(), &req)
        .await
}

pub fn configure_chapter_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/chapter")
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_chapter))
                    .route(web::put().to(update_chapter).wrap(middlewares::RequireJWT))
                    .route(web::delete().to(delete_chapter).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}/lesson")
                    .route(web::get().to(list_lessons))
                    .route(web::post().to(create_lesson).wrap(middlewares::RequireJWT)),
            ),
    );
}
