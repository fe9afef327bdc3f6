pub mod auth;
pub mod categories;
pub mod chapters;
pub mod courses;
pub mod feedbacks;
pub mod guards;
pub mod lessons;
pub mod users;

pub use auth::AuthService;
pub use categories::CategoryService;
pub use chapters::ChapterService;
pub use courses::CourseService;
pub use feedbacks::FeedbackService;
pub use lessons::LessonService;
pub use users::UserService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

// 从 app_data 中取出存储实例，启动时必须注册
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn cache_from_request(request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
}
