//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

#[macro_use]
pub mod base;
pub mod prelude;

pub mod categories;
pub mod chapters;
pub mod courses;
pub mod enrollments;
pub mod feedbacks;
pub mod lessons;
pub mod users;

pub use base::BaseEntity;
