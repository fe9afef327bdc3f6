mod common;

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use rust_coursehub::cache::create_object_cache;
use rust_coursehub::models::chapters::requests::CreateChapterRequest;
use rust_coursehub::models::users::entities::{User, UserRole};
use rust_coursehub::routes;
use rust_coursehub::storage::Storage;
use rust_coursehub::utils::jwt::JwtUtils;
use rust_coursehub::utils::{json_error_handler, query_error_handler};

// 与 main.rs 相同的 App 组装方式，存储换成内存 SQLite
macro_rules! init_app {
    ($storage:expr) => {{
        let storage: Arc<dyn Storage> = $storage.clone();
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(create_object_cache()))
                .configure(routes::configure_routes),
        )
        .await
    }};
}

fn bearer(user: &User) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(&user.id, &user.role.to_string())
        .expect("sign access token");
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_category_write_requires_author_role() {
    let storage = Arc::new(common::memory_storage().await);
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let expert = common::seed_user(&storage, "expert", UserRole::Expert).await;
    let app = init_app!(storage);

    let anonymous = test::TestRequest::post()
        .uri("/api/v1/category")
        .set_json(json!({ "name": "Systems" }))
        .to_request();
    let resp = test::call_service(&app, anonymous).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let as_student = test::TestRequest::post()
        .uri("/api/v1/category")
        .insert_header(bearer(&student))
        .set_json(json!({ "name": "Systems" }))
        .to_request();
    let resp = test::call_service(&app, as_student).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let as_expert = test::TestRequest::post()
        .uri("/api/v1/category")
        .insert_header(bearer(&expert))
        .set_json(json!({ "name": "Systems" }))
        .to_request();
    let resp = test::call_service(&app, as_expert).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let category_id = body["detail"].as_str().expect("new id").to_string();

    // 列表公开可读
    let list = test::TestRequest::get().uri("/api/v1/category").to_request();
    let categories: Value = test::call_and_read_body_json(&app, list).await;
    assert_eq!(categories[0]["id"], category_id);
    assert_eq!(categories[0]["name"], "Systems");
}

#[actix_web::test]
async fn test_invalid_token_and_path_id() {
    let storage = Arc::new(common::memory_storage().await);
    let app = init_app!(storage);

    let forged = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, forged).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let bad_id = test::TestRequest::get()
        .uri("/api/v1/course/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, bad_id).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_only_author_updates_chapter() {
    let storage = Arc::new(common::memory_storage().await);
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let other = common::seed_user(&storage, "other", UserRole::Expert).await;
    let course = common::seed_course(&storage, &author, "Borrowing").await;
    let chapter = storage
        .create_chapter(
            &course.id,
            &author.id,
            CreateChapterRequest {
                title: "Draft".to_string(),
                description: "Shared references".to_string(),
            },
        )
        .await
        .expect("chapter");
    let app = init_app!(storage);
    let uri = format!("/api/v1/chapter/{}", chapter.id);

    let by_other = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&other))
        .set_json(json!({ "title": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, by_other).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let by_author = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&author))
        .set_json(json!({ "title": "Borrowing rules" }))
        .to_request();
    let resp = test::call_service(&app, by_author).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Borrowing rules");
    assert_eq!(updated["description"], "Shared references");
}

#[actix_web::test]
async fn test_lesson_inherits_chapter_author() {
    let storage = Arc::new(common::memory_storage().await);
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let other = common::seed_user(&storage, "other", UserRole::Staff).await;
    let course = common::seed_course(&storage, &author, "Iterators").await;
    let chapter = storage
        .create_chapter(
            &course.id,
            &author.id,
            CreateChapterRequest {
                title: "Adapters".to_string(),
                description: String::new(),
            },
        )
        .await
        .expect("chapter");
    let app = init_app!(storage);
    let uri = format!("/api/v1/chapter/{}/lesson", chapter.id);
    let lesson = json!({ "title": "map", "description": "Transform items", "content": "..." });

    let by_other = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&other))
        .set_json(&lesson)
        .to_request();
    let resp = test::call_service(&app, by_other).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let by_author = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&author))
        .set_json(&lesson)
        .to_request();
    let resp = test::call_service(&app, by_author).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let lesson_id = body["detail"].as_str().expect("new id");

    let stored = storage
        .get_lesson_by_id(lesson_id)
        .await
        .expect("find")
        .expect("lesson exists");
    assert_eq!(stored.author_id, chapter.author_id);
    assert_eq!(stored.chapter_id, chapter.id);
}

#[actix_web::test]
async fn test_enrollment_and_feedback_flow() {
    let storage = Arc::new(common::memory_storage().await);
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let visitor = common::seed_user(&storage, "visitor", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Concurrency").await;
    let app = init_app!(storage);

    let rating_uri = format!("/api/v1/course/{}/rating", course.id);
    let rating: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&rating_uri).to_request())
            .await;
    assert_eq!(rating["average"], 0.0);
    assert_eq!(rating["count"], 0);

    let enroll_uri = format!("/api/v1/course/{}/enroll", course.id);
    let first = test::TestRequest::post()
        .uri(&enroll_uri)
        .insert_header(bearer(&student))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri(&enroll_uri)
        .insert_header(bearer(&student))
        .to_request();
    assert_eq!(test::call_service(&app, second).await.status(), StatusCode::CONFLICT);

    let feedback_uri = format!("/api/v1/course/{}/feedback", course.id);
    let not_enrolled = test::TestRequest::post()
        .uri(&feedback_uri)
        .insert_header(bearer(&visitor))
        .set_json(json!({ "rating": 2.0, "comment": "Never attended" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, not_enrolled).await.status(),
        StatusCode::FORBIDDEN
    );

    let out_of_range = test::TestRequest::post()
        .uri(&feedback_uri)
        .insert_header(bearer(&student))
        .set_json(json!({ "rating": 7.5, "comment": "Too good" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, out_of_range).await.status(),
        StatusCode::BAD_REQUEST
    );

    let feedback = test::TestRequest::post()
        .uri(&feedback_uri)
        .insert_header(bearer(&student))
        .set_json(json!({ "rating": 4.0, "comment": "Clear examples" }))
        .to_request();
    assert_eq!(test::call_service(&app, feedback).await.status(), StatusCode::CREATED);

    let rating: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&rating_uri).to_request())
            .await;
    assert_eq!(rating["average"], 4.0);
    assert_eq!(rating["count"], 1);
}
