#![allow(dead_code)]

use rust_coursehub::config::DatabaseConfig;
use rust_coursehub::models::courses::entities::{Course, CourseLevel};
use rust_coursehub::models::courses::requests::CreateCourseRequest;
use rust_coursehub::models::users::entities::{User, UserRole};
use rust_coursehub::models::users::requests::CreateUserRequest;
use rust_coursehub::storage::Storage;
use rust_coursehub::storage::sea_orm_storage::SeaOrmStorage;

/// 已执行迁移的内存 SQLite 存储
pub async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should start")
}

pub async fn seed_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
    let request = CreateUserRequest {
        username: username.to_string(),
        password: "unused".to_string(),
        email: format!("{username}@example.com"),
        full_name: format!("{username} tester"),
        gender: false,
        dob: chrono::NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        phone: "0123456789".to_string(),
        address: "Somewhere".to_string(),
        bio: String::new(),
        avatar: None,
    };
    storage
        .create_user(request, "hash".to_string(), role)
        .await
        .expect("create user")
}

pub async fn seed_course(storage: &SeaOrmStorage, author: &User, title: &str) -> Course {
    let category = storage
        .create_category(rust_coursehub::models::categories::requests::CreateCategoryRequest {
            name: format!("{title} category"),
        })
        .await
        .expect("create category");

    storage
        .create_course(
            &author.id,
            CreateCourseRequest {
                title: title.to_string(),
                description: "An introductory course".to_string(),
                level: CourseLevel::Beginner,
                image: None,
                is_public: true,
                category_id: category.id,
            },
        )
        .await
        .expect("create course")
}
