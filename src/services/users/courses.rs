use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::guard;
use crate::models::enrollments::requests::EnrollmentSearchParams;
use crate::services::guards::{current_user, stored};

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_my_courses(
    service: &UserService,
    query: EnrollmentSearchParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    let storage = service.get_storage(request);

    let courses = guard!(stored(
        storage
            .list_courses_by_user_id(&user.id, &query.search, query.pagination.page(DEFAULT_LIMIT))
            .await,
        "Failed to list enrolled courses",
    ));

    Ok(HttpResponse::Ok().json(courses))
}
