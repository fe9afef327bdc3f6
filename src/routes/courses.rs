use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::chapters::requests::CreateChapterRequest;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::enrollments::requests::EnrollmentSearchParams;
use crate::models::feedbacks::requests::CreateFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeId;

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(data.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&course_id, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeId,
    data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&course_id, data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&course_id, &req).await
}

pub async fn list_chapters(
    req: HttpRequest,
    course_id: SafeId,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_chapters(&course_id, query.into_inner(), &req)
        .await
}

pub async fn create_chapter(
    req: HttpRequest,
    course_id: SafeId,
    data: web::Json<CreateChapterRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_chapter(&course_id, data.into_inner(), &req)
        .await
}

pub async fn enroll(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.enroll(&course_id, &req).await
}

pub async fn unenroll(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.unenroll(&course_id, &req).await
}

pub async fn list_students(
    req: HttpRequest,
    course_id: SafeId,
    query: web::Query<EnrollmentSearchParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_students(&course_id, query.into_inner(), &req)
        .await
}

pub async fn list_feedbacks(
    req: HttpRequest,
    course_id: SafeId,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_feedbacks(&course_id, query.into_inner(), &req)
        .await
}

pub async fn create_feedback(
    req: HttpRequest,
    course_id: SafeId,
    data: web::Json<CreateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_feedback(&course_id, data.into_inner(), &req)
        .await
}

pub async fn get_rating(req: HttpRequest, course_id: SafeId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_rating(&course_id, &req).await
}

pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/course")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(
                        web::post()
                            .to(create_course)
                            // 学员不能创建课程
                            .wrap(middlewares::RequireRole::new_any(UserRole::author_roles()))
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course).wrap(middlewares::RequireJWT))
                    .route(web::delete().to(delete_course).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}/chapter")
                    .route(web::get().to(list_chapters))
                    .route(web::post().to(create_chapter).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}/enroll")
                    .route(web::post().to(enroll).wrap(middlewares::RequireJWT))
                    .route(web::delete().to(unenroll).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}/student")
                    .route(web::get().to(list_students).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}/feedback")
                    .route(web::get().to(list_feedbacks))
                    .route(web::post().to(create_feedback).wrap(middlewares::RequireJWT)),
            )
            .service(web::resource("/{id}/rating").route(web::get().to(get_rating))),
    );
}
