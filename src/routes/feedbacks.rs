use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedbacks::requests::UpdateFeedbackRequest;
use crate::services::FeedbackService;
use crate::utils::SafeId;

static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

pub async fn update_feedback(
    req: HttpRequest,
    feedback_id: SafeId,
    data: web::Json<UpdateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .update_feedback(&feedback_id, data.into_inner(), &req)
        .await
}

pub async fn delete_feedback(req: HttpRequest, feedback_id: SafeId) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.delete_feedback(&feedback_id, &req).await
}

pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_feedback))
                    .route(web::delete().to(delete_feedback)),
            ),
    );
}
