use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lessons::requests::UpdateLessonRequest;
use crate::services::LessonService;
use crate::utils::SafeId;

static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

pub async fn get_lesson(req: HttpRequest, lesson_id: SafeId) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_lesson(&lesson_id, &req).await
}

pub async fn update_lesson(
    req: HttpRequest,
    lesson_id: SafeId,
    data: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_lesson(&lesson_id, data.into_inner(), &req)
        .await
}

pub async fn delete_lesson(req: HttpRequest, lesson_id: SafeId) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(&lesson_id, &req).await
}

pub fn configure_lesson_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lesson").service(
            web::resource("/{id}")
                .route(web::get().to(get_lesson))
                .route(web::put().to(update_lesson).wrap(middlewares::RequireJWT))
                .route(web::delete().to(delete_lesson).wrap(middlewares::RequireJWT)),
        ),
    );
}
