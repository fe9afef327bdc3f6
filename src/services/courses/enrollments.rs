use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::manage::{load_course, load_own_course};
use crate::guard;
use crate::models::{Detail, ErrorCode, enrollments::requests::EnrollmentSearchParams};
use crate::services::guards::{conflict, current_user, not_found, stored};

const DEFAULT_LIMIT: u64 = 10;

/// 选课，同一课程只能选一次
pub async fn enroll(
    service: &CourseService,
    course_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    if guard!(stored(
        storage
            .exist_enrollment_by_user_id_and_course_id(&user.id, &course.id)
            .await,
        "Failed to check enrollment",
    )) {
        return Ok(conflict(
            ErrorCode::AlreadyEnrolled,
            "Already enrolled in this course",
        ));
    }

    // 并发重复选课由唯一索引兜底，映射为 409
    let enrollment = guard!(stored(
        storage.create_enrollment(&user.id, &course.id).await,
        "Failed to enroll",
    ));

    Ok(HttpResponse::Created().json(Detail::new(enrollment.id)))
}

pub async fn unenroll(
    service: &CourseService,
    course_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    let Some(enrollment) = guard!(stored(
        storage
            .get_enrollment_by_user_id_and_course_id(&user.id, &course.id)
            .await,
        "Failed to load enrollment",
    )) else {
        return Ok(not_found(
            ErrorCode::NotEnrolled,
            "Not enrolled in this course",
        ));
    };

    guard!(stored(
        storage.delete_enrollment(&enrollment.id).await,
        "Failed to unenroll",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
}

/// 课程学员列表，仅课程作者可见
pub async fn list_students(
    service: &CourseService,
    course_id: &str,
    query: EnrollmentSearchParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_own_course(&storage, course_id, request).await);

    let students = guard!(stored(
        storage
            .list_users_by_course_id(&course.id, &query.search, query.pagination.page(DEFAULT_LIMIT))
            .await,
        "Failed to list students",
    ));

    Ok(HttpResponse::Ok().json(students))
}
