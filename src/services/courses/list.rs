use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::guard;
use crate::models::{ErrorCode, courses::requests::CourseListParams};
use crate::services::guards::{bad_request, stored};

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let filters = match query.to_query() {
        Ok(filters) => filters,
        Err(msg) => return Ok(bad_request(ErrorCode::CourseLevelInvalid, msg)),
    };
    let page = query.pagination.page(DEFAULT_LIMIT);

    let storage = service.get_storage(request);
    let courses = guard!(stored(
        storage.list_courses(filters, page).await,
        "Failed to list courses",
    ));

    Ok(HttpResponse::Ok().json(courses))
}
