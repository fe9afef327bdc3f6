use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::CourseService;
use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
};
use crate::services::guards::{
    GuardResult, bad_request, current_user, require_author, require_existed, stored, validated,
};
use crate::storage::Storage;
use crate::utils::validate::validate_not_blank;

/// 加载课程，不存在时 404
pub(crate) async fn load_course(storage: &Arc<dyn Storage>, course_id: &str) -> GuardResult<Course> {
    require_existed(
        storage.get_course_by_id(course_id).await,
        ErrorCode::CourseNotFound,
        "Course",
    )
}

/// 加载课程并要求当前用户为作者
pub(crate) async fn load_own_course(
    storage: &Arc<dyn Storage>,
    course_id: &str,
    request: &HttpRequest,
) -> GuardResult<Course> {
    let user = current_user(request)?;
    let course = load_course(storage, course_id).await?;
    require_author(&course, &user)?;
    Ok(course)
}

// 引用的分类必须存在
async fn check_category(storage: &Arc<dyn Storage>, category_id: &str) -> GuardResult<()> {
    let category = stored(
        storage.get_category_by_id(category_id).await,
        "Failed to load category",
    )?;
    match category {
        Some(_) => Ok(()),
        None => Err(bad_request(
            ErrorCode::CategoryNotFound,
            format!("Category {category_id} does not exist"),
        )),
    }
}

pub async fn create_course(
    service: &CourseService,
    data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    guard!(validated(
        validate_not_blank("title", &data.title),
        ErrorCode::ValidationFailed,
    ));

    let storage = service.get_storage(request);
    guard!(check_category(&storage, &data.category_id).await);

    let course = guard!(stored(
        storage.create_course(&user.id, data).await,
        "Failed to create course",
    ));
    tracing::info!("Course {} created by {}", course.id, user.username);

    Ok(HttpResponse::Created().json(Detail::new(course.id)))
}

pub async fn get_course(
    service: &CourseService,
    course_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);
    Ok(HttpResponse::Ok().json(course))
}

pub async fn update_course(
    service: &CourseService,
    course_id: &str,
    data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    guard!(load_own_course(&storage, course_id, request).await);

    if let Some(title) = &data.title {
        guard!(validated(
            validate_not_blank("title", title),
            ErrorCode::ValidationFailed,
        ));
    }
    if let Some(category_id) = &data.category_id {
        guard!(check_category(&storage, category_id).await);
    }

    guard!(require_existed(
        storage.update_course(course_id, data).await,
        ErrorCode::CourseNotFound,
        "Course",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Updated")))
}

pub async fn delete_course(
    service: &CourseService,
    course_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    guard!(load_own_course(&storage, course_id, request).await);

    guard!(stored(
        storage.delete_course(course_id).await,
        "Failed to delete course",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
}
