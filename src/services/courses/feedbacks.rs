use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::manage::load_course;
use crate::guard;
use crate::models::{
    Detail, ErrorCode, PaginationQuery, courses::responses::CourseRatingResponse,
    feedbacks::requests::CreateFeedbackRequest,
};
use crate::services::guards::{conflict, current_user, require_enrolled, stored, validated};

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_feedbacks(
    service: &CourseService,
    course_id: &str,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    let feedbacks = guard!(stored(
        storage
            .list_feedbacks_by_course_id(&course.id, query.page(DEFAULT_LIMIT))
            .await,
        "Failed to list feedbacks",
    ));

    Ok(HttpResponse::Ok().json(feedbacks))
}

/// 发表评价：必须已选课，且每门课程只能评价一次
pub async fn create_feedback(
    service: &CourseService,
    course_id: &str,
    data: CreateFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    guard!(validated(data.validate(), ErrorCode::FeedbackRatingInvalid));

    let user = guard!(current_user(request));
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    guard!(
        require_enrolled(
            storage.as_ref(),
            &course,
            &user,
            "You must enroll in this course before giving feedback",
        )
        .await
    );

    if guard!(stored(
        storage
            .exist_feedback_by_user_id_and_course_id(&user.id, &course.id)
            .await,
        "Failed to check feedback",
    )) {
        return Ok(conflict(
            ErrorCode::FeedbackAlreadyExists,
            "Feedback already exists for this course",
        ));
    }

    let feedback = guard!(stored(
        storage.create_feedback(&user.id, &course.id, data).await,
        "Failed to create feedback",
    ));

    Ok(HttpResponse::Created().json(Detail::new(feedback.id)))
}

pub async fn get_rating(
    service: &CourseService,
    course_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course = guard!(load_course(&storage, course_id).await);

    let average = guard!(stored(
        storage.average_rating_by_course_id(&course.id).await,
        "Failed to compute rating",
    ));
    let count = guard!(stored(
        storage.count_feedbacks_by_course_id(&course.id).await,
        "Failed to count feedbacks",
    ));

    Ok(HttpResponse::Ok().json(CourseRatingResponse {
        course_id: course.id,
        average,
        count,
    }))
}
