use std::sync::Arc;

use crate::models::{
    Page,
    categories::{
        entities::Category,
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
    },
    chapters::{
        entities::Chapter,
        requests::{CreateChapterRequest, UpdateChapterRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    enrollments::entities::Enrollment,
    feedbacks::{
        entities::Feedback,
        requests::{CreateFeedbackRequest, UpdateFeedbackRequest},
    },
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, UpdateLessonRequest},
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(
        &self,
        user: CreateUserRequest,
        password_hash: String,
        role: UserRole,
    ) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户（按姓名搜索）
    async fn list_users(&self, search: Option<&str>, page: Page) -> Result<Vec<User>>;
    // 更新用户资料
    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>>;
    // 修改用户角色
    async fn change_user_role(&self, id: &str, role: UserRole) -> Result<Option<User>>;
    // 修改用户密码
    async fn change_user_password(&self, id: &str, password_hash: String) -> Result<bool>;
    // 删除用户
    async fn delete_user(&self, id: &str) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 分类管理方法
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    async fn get_category_by_id(&self, id: &str) -> Result<Option<Category>>;
    async fn list_categories(&self, page: Page) -> Result<Vec<Category>>;
    async fn update_category(
        &self,
        id: &str,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    async fn delete_category(&self, id: &str) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, author_id: &str, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>>;
    async fn list_courses(&self, query: CourseListQuery, page: Page) -> Result<Vec<Course>>;
    async fn update_course(&self, id: &str, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    async fn delete_course(&self, id: &str) -> Result<bool>;

    /// 章节管理方法
    async fn create_chapter(
        &self,
        course_id: &str,
        author_id: &str,
        chapter: CreateChapterRequest,
    ) -> Result<Chapter>;
    async fn get_chapter_by_id(&self, id: &str) -> Result<Option<Chapter>>;
    async fn list_chapters_by_course_id(&self, course_id: &str, page: Page)
    -> Result<Vec<Chapter>>;
    async fn update_chapter(
        &self,
        id: &str,
        update: UpdateChapterRequest,
    ) -> Result<Option<Chapter>>;
    async fn delete_chapter(&self, id: &str) -> Result<bool>;

    /// 课时管理方法
    async fn create_lesson(
        &self,
        chapter_id: &str,
        author_id: &str,
        lesson: CreateLessonRequest,
    ) -> Result<Lesson>;
    async fn get_lesson_by_id(&self, id: &str) -> Result<Option<Lesson>>;
    async fn list_lessons_by_chapter_id(&self, chapter_id: &str, page: Page)
    -> Result<Vec<Lesson>>;
    async fn update_lesson(&self, id: &str, update: UpdateLessonRequest)
    -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, id: &str) -> Result<bool>;

    /// 选课管理方法
    async fn create_enrollment(&self, user_id: &str, course_id: &str) -> Result<Enrollment>;
    async fn get_enrollment_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Enrollment>>;
    async fn exist_enrollment_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool>;
    async fn delete_enrollment(&self, id: &str) -> Result<bool>;
    // 用户已选课程
    async fn list_courses_by_user_id(
        &self,
        user_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<Course>>;
    // 课程学员
    async fn list_users_by_course_id(
        &self,
        course_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<User>>;
    async fn count_enrollments_by_course_id(&self, course_id: &str) -> Result<u64>;

    /// 评价管理方法
    async fn create_feedback(
        &self,
        user_id: &str,
        course_id: &str,
        feedback: CreateFeedbackRequest,
    ) -> Result<Feedback>;
    async fn get_feedback_by_id(&self, id: &str) -> Result<Option<Feedback>>;
    async fn get_feedback_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Feedback>>;
    async fn exist_feedback_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool>;
    async fn list_feedbacks_by_course_id(
        &self,
        course_id: &str,
        page: Page,
    ) -> Result<Vec<Feedback>>;
    async fn update_feedback(
        &self,
        id: &str,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<Feedback>>;
    async fn delete_feedback(&self, id: &str) -> Result<bool>;
    async fn count_feedbacks_by_course_id(&self, course_id: &str) -> Result<u64>;
    // 平均评分，没有评价时为 0
    async fn average_rating_by_course_id(&self, course_id: &str) -> Result<f64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
