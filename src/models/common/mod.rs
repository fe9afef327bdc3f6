pub mod error_code;
pub mod ownership;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use ownership::{AuthorRelated, CourseRelated};
pub use pagination::{Page, PaginationQuery};
pub use response::{Detail, ErrorResponse};
