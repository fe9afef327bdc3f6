//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

pub mod crud;

mod categories;
mod chapters;
mod courses;
mod enrollments;
mod feedbacks;
mod lessons;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// 底层数据库连接，供通用 CRUD 直接使用
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存数据库每个连接相互独立，只能使用单连接且不能回收
        let in_memory = url.contains(":memory:");

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let opt = if in_memory {
            opt
        } else {
            opt.journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000")
        };

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite connection failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(
        &self,
        user: CreateUserRequest,
        password_hash: String,
        role: UserRole,
    ) -> Result<User> {
        self.create_user_impl(user, password_hash, role).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users(&self, search: Option<&str>, page: Page) -> Result<Vec<User>> {
        self.list_users_impl(search, page).await
    }

    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn change_user_role(&self, id: &str, role: UserRole) -> Result<Option<User>> {
        self.change_user_role_impl(id, role).await
    }

    async fn change_user_password(&self, id: &str, password_hash: String) -> Result<bool> {
        self.change_user_password_impl(id, password_hash).await
    }

    async fn delete_user(&self, id: &str) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 分类模块
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category> {
        self.create_category_impl(category).await
    }

    async fn get_category_by_id(&self, id: &str) -> Result<Option<Category>> {
        self.get_category_by_id_impl(id).await
    }

    async fn list_categories(&self, page: Page) -> Result<Vec<Category>> {
        self.list_categories_impl(page).await
    }

    async fn update_category(
        &self,
        id: &str,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        self.update_category_impl(id, update).await
    }

    async fn delete_category(&self, id: &str) -> Result<bool> {
        self.delete_category_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, author_id: &str, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(author_id, course).await
    }

    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self, query: CourseListQuery, page: Page) -> Result<Vec<Course>> {
        self.list_courses_impl(query, page).await
    }

    async fn update_course(
        &self,
        id: &str,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: &str) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 章节模块
    async fn create_chapter(
        &self,
        course_id: &str,
        author_id: &str,
        chapter: CreateChapterRequest,
    ) -> Result<Chapter> {
        self.create_chapter_impl(course_id, author_id, chapter)
            .await
    }

    async fn get_chapter_by_id(&self, id: &str) -> Result<Option<Chapter>> {
        self.get_chapter_by_id_impl(id).await
    }

    async fn list_chapters_by_course_id(
        &self,
        course_id: &str,
        page: Page,
    ) -> Result<Vec<Chapter>> {
        self.list_chapters_by_course_id_impl(course_id, page).await
    }

    async fn update_chapter(
        &self,
        id: &str,
        update: UpdateChapterRequest,
    ) -> Result<Option<Chapter>> {
        self.update_chapter_impl(id, update).await
    }

    async fn delete_chapter(&self, id: &str) -> Result<bool> {
        self.delete_chapter_impl(id).await
    }

    // 课时模块
    async fn create_lesson(
        &self,
        chapter_id: &str,
        author_id: &str,
        lesson: CreateLessonRequest,
    ) -> Result<Lesson> {
        self.create_lesson_impl(chapter_id, author_id, lesson).await
    }

    async fn get_lesson_by_id(&self, id: &str) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(id).await
    }

    async fn list_lessons_by_chapter_id(
        &self,
        chapter_id: &str,
        page: Page,
    ) -> Result<Vec<Lesson>> {
        self.list_lessons_by_chapter_id_impl(chapter_id, page).await
    }

    async fn update_lesson(
        &self,
        id: &str,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn delete_lesson(&self, id: &str) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, user_id: &str, course_id: &str) -> Result<Enrollment> {
        self.create_enrollment_impl(user_id, course_id).await
    }

    async fn get_enrollment_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_user_id_and_course_id_impl(user_id, course_id)
            .await
    }

    async fn exist_enrollment_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool> {
        self.exist_enrollment_by_user_id_and_course_id_impl(user_id, course_id)
            .await
    }

    async fn delete_enrollment(&self, id: &str) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    async fn list_courses_by_user_id(
        &self,
        user_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<Course>> {
        self.list_courses_by_user_id_impl(user_id, search, page)
            .await
    }

    async fn list_users_by_course_id(
        &self,
        course_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<User>> {
        self.list_users_by_course_id_impl(course_id, search, page)
            .await
    }

    async fn count_enrollments_by_course_id(&self, course_id: &str) -> Result<u64> {
        self.count_enrollments_by_course_id_impl(course_id).await
    }

    // 评价模块
    async fn create_feedback(
        &self,
        user_id: &str,
        course_id: &str,
        feedback: CreateFeedbackRequest,
    ) -> Result<Feedback> {
        self.create_feedback_impl(user_id, course_id, feedback)
            .await
    }

    async fn get_feedback_by_id(&self, id: &str) -> Result<Option<Feedback>> {
        self.get_feedback_by_id_impl(id).await
    }

    async fn get_feedback_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Feedback>> {
        self.get_feedback_by_user_id_and_course_id_impl(user_id, course_id)
            .await
    }

    async fn exist_feedback_by_user_id_and_course_id(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool> {
        self.exist_feedback_by_user_id_and_course_id_impl(user_id, course_id)
            .await
    }

    async fn list_feedbacks_by_course_id(
        &self,
        course_id: &str,
        page: Page,
    ) -> Result<Vec<Feedback>> {
        self.list_feedbacks_by_course_id_impl(course_id, page).await
    }

    async fn update_feedback(
        &self,
        id: &str,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<Feedback>> {
        self.update_feedback_impl(id, update).await
    }

    async fn delete_feedback(&self, id: &str) -> Result<bool> {
        self.delete_feedback_impl(id).await
    }

    async fn count_feedbacks_by_course_id(&self, course_id: &str) -> Result<u64> {
        self.count_feedbacks_by_course_id_impl(course_id).await
    }

    async fn average_rating_by_course_id(&self, course_id: &str) -> Result<f64> {
        self.average_rating_by_course_id_impl(course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("coursehub.db").expect("sqlite file"),
            "sqlite://coursehub.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").expect("memory"),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/lms").expect("pg"),
            "postgres://u:p@localhost/lms"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
