//! 资源归属能力
//!
//! 授权检查只依赖这些 trait，不关心具体实体类型：
//! 能提供作者 ID 的资源实现 [`AuthorRelated`]，归属于某门课程的资源实现 [`CourseRelated`]。

/// 能够给出作者（所有者）用户 ID 的资源
pub trait AuthorRelated {
    fn author_id(&self) -> &str;
}

/// 归属于某门课程的资源
pub trait CourseRelated {
    fn course_id(&self) -> &str;
}
