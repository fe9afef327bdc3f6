pub mod auth;

pub mod users;

pub mod categories;

pub mod courses;

pub mod chapters;

pub mod lessons;

pub mod feedbacks;

pub use auth::configure_auth_routes;
pub use categories::configure_category_routes;
pub use chapters::configure_chapter_routes;
pub use courses::configure_course_routes;
pub use feedbacks::configure_feedback_routes;
pub use lessons::configure_lesson_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部 `/api/v1` 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_category_routes(cfg);
    configure_course_routes(cfg);
    configure_chapter_routes(cfg);
    configure_lesson_routes(cfg);
    configure_feedback_routes(cfg);
}
