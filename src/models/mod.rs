pub mod auth;
pub mod categories;
pub mod chapters;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod feedbacks;
pub mod lessons;
pub mod users;

pub use common::{
    AuthorRelated, CourseRelated, Detail, ErrorCode, ErrorResponse, Page, PaginationQuery,
};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
