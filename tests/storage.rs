mod common;

use rust_coursehub::errors::LmsError;
use rust_coursehub::models::Page;
use rust_coursehub::models::chapters::requests::{CreateChapterRequest, UpdateChapterRequest};
use rust_coursehub::models::courses::entities::CourseLevel;
use rust_coursehub::models::courses::requests::{CourseListQuery, UpdateCourseRequest};
use rust_coursehub::models::feedbacks::requests::CreateFeedbackRequest;
use rust_coursehub::models::lessons::requests::CreateLessonRequest;
use rust_coursehub::models::users::entities::UserRole;
use rust_coursehub::storage::Storage;

fn feedback(rating: f64) -> CreateFeedbackRequest {
    CreateFeedbackRequest {
        rating,
        comment: "Solid material".to_string(),
    }
}

#[tokio::test]
async fn test_average_rating() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let alice = common::seed_user(&storage, "alice", UserRole::User).await;
    let bob = common::seed_user(&storage, "bob", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Ownership").await;

    let empty = storage
        .average_rating_by_course_id(&course.id)
        .await
        .expect("average");
    assert_eq!(empty, 0.0);

    storage
        .create_feedback(&alice.id, &course.id, feedback(4.0))
        .await
        .expect("feedback");
    storage
        .create_feedback(&bob.id, &course.id, feedback(5.0))
        .await
        .expect("feedback");

    let average = storage
        .average_rating_by_course_id(&course.id)
        .await
        .expect("average");
    assert!((average - 4.5).abs() < f64::EPSILON);
    assert_eq!(
        storage
            .count_feedbacks_by_course_id(&course.id)
            .await
            .expect("count"),
        2
    );
}

#[tokio::test]
async fn test_enrollment_exists_only_after_create() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Lifetimes").await;

    assert!(
        !storage
            .exist_enrollment_by_user_id_and_course_id(&student.id, &course.id)
            .await
            .expect("exists")
    );

    storage
        .create_enrollment(&student.id, &course.id)
        .await
        .expect("enroll");

    assert!(
        storage
            .exist_enrollment_by_user_id_and_course_id(&student.id, &course.id)
            .await
            .expect("exists")
    );
    assert!(
        !storage
            .exist_enrollment_by_user_id_and_course_id(&author.id, &course.id)
            .await
            .expect("exists")
    );
}

#[tokio::test]
async fn test_duplicate_enrollment_is_unique_violation() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Traits").await;

    storage
        .create_enrollment(&student.id, &course.id)
        .await
        .expect("enroll");
    let err = storage
        .create_enrollment(&student.id, &course.id)
        .await
        .expect_err("second enrollment must fail");
    assert!(matches!(err, LmsError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_feedback_exists_only_after_create() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Macros").await;

    assert!(
        !storage
            .exist_feedback_by_user_id_and_course_id(&student.id, &course.id)
            .await
            .expect("exists")
    );
    storage
        .create_feedback(&student.id, &course.id, feedback(3.0))
        .await
        .expect("feedback");
    let found = storage
        .get_feedback_by_user_id_and_course_id(&student.id, &course.id)
        .await
        .expect("find")
        .expect("feedback exists");
    assert_eq!(found.rating, 3.0);
}

#[tokio::test]
async fn test_partial_course_update_keeps_other_fields() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let course = common::seed_course(&storage, &author, "Async").await;

    let updated = storage
        .update_course(
            &course.id,
            UpdateCourseRequest {
                title: Some("Async Rust".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("course exists");

    assert_eq!(updated.title, "Async Rust");
    assert_eq!(updated.description, course.description);
    assert_eq!(updated.level, course.level);
    assert_eq!(updated.category_id, course.category_id);
    assert_eq!(updated.author_id, course.author_id);
    assert_eq!(updated.created_at, course.created_at);
}

#[tokio::test]
async fn test_course_list_filters() {
    let storage = common::memory_storage().await;
    let expert = common::seed_user(&storage, "expert", UserRole::Expert).await;
    let staff = common::seed_user(&storage, "staff", UserRole::Staff).await;
    let intro = common::seed_course(&storage, &expert, "Intro to Rust").await;
    let other = common::seed_course(&storage, &staff, "100%_sure").await;

    let by_title = storage
        .list_courses(
            CourseListQuery {
                search: Some("rust".to_string()),
                ..Default::default()
            },
            Page::new(10, 0),
        )
        .await
        .expect("list");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, intro.id);

    // 通配符按字面匹配
    let literal = storage
        .list_courses(
            CourseListQuery {
                search: Some("%_".to_string()),
                ..Default::default()
            },
            Page::new(10, 0),
        )
        .await
        .expect("list");
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].id, other.id);

    let by_author = storage
        .list_courses(
            CourseListQuery {
                author_ids: vec![staff.id.clone()],
                ..Default::default()
            },
            Page::new(10, 0),
        )
        .await
        .expect("list");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, other.id);

    let advanced = storage
        .list_courses(
            CourseListQuery {
                levels: vec![CourseLevel::Advanced],
                ..Default::default()
            },
            Page::new(10, 0),
        )
        .await
        .expect("list");
    assert!(advanced.is_empty());
}

#[tokio::test]
async fn test_enrollment_joins() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Generics").await;
    common::seed_course(&storage, &author, "Closures").await;

    storage
        .create_enrollment(&student.id, &course.id)
        .await
        .expect("enroll");

    let courses = storage
        .list_courses_by_user_id(&student.id, "", Page::new(10, 0))
        .await
        .expect("list");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, course.id);

    let none = storage
        .list_courses_by_user_id(&student.id, "closures", Page::new(10, 0))
        .await
        .expect("list");
    assert!(none.is_empty());

    let students = storage
        .list_users_by_course_id(&course.id, "student", Page::new(10, 0))
        .await
        .expect("list");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);
    assert_eq!(
        storage
            .count_enrollments_by_course_id(&course.id)
            .await
            .expect("count"),
        1
    );
}

#[tokio::test]
async fn test_course_delete_cascades() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let student = common::seed_user(&storage, "student", UserRole::User).await;
    let course = common::seed_course(&storage, &author, "Cascade").await;

    let chapter = storage
        .create_chapter(
            &course.id,
            &author.id,
            CreateChapterRequest {
                title: "Basics".to_string(),
                description: "First steps".to_string(),
            },
        )
        .await
        .expect("chapter");
    storage
        .create_enrollment(&student.id, &course.id)
        .await
        .expect("enroll");
    storage
        .create_feedback(&student.id, &course.id, feedback(5.0))
        .await
        .expect("feedback");

    assert!(storage.delete_course(&course.id).await.expect("delete"));

    assert!(storage.get_course_by_id(&course.id).await.expect("find").is_none());
    assert!(storage.get_chapter_by_id(&chapter.id).await.expect("find").is_none());
    assert!(
        !storage
            .exist_enrollment_by_user_id_and_course_id(&student.id, &course.id)
            .await
            .expect("exists")
    );
    assert!(
        !storage
            .exist_feedback_by_user_id_and_course_id(&student.id, &course.id)
            .await
            .expect("exists")
    );
}

#[tokio::test]
async fn test_chapter_update_and_missing_rows() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let course = common::seed_course(&storage, &author, "Chapters").await;

    let chapter = storage
        .create_chapter(
            &course.id,
            &author.id,
            CreateChapterRequest {
                title: "Draft".to_string(),
                description: "To be written".to_string(),
            },
        )
        .await
        .expect("chapter");

    let updated = storage
        .update_chapter(
            &chapter.id,
            UpdateChapterRequest {
                description: Some("Written".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("chapter exists");
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.description, "Written");

    let missing = storage
        .update_chapter("00000000-0000-0000-0000-000000000000", UpdateChapterRequest::default())
        .await
        .expect("update");
    assert!(missing.is_none());
    assert!(
        !storage
            .delete_chapter("00000000-0000-0000-0000-000000000000")
            .await
            .expect("delete")
    );
}

#[tokio::test]
async fn test_user_lookup_and_role_change() {
    let storage = common::memory_storage().await;
    let user = common::seed_user(&storage, "carol", UserRole::User).await;

    let by_email = storage
        .get_user_by_username_or_email("carol@example.com")
        .await
        .expect("find")
        .expect("user exists");
    assert_eq!(by_email.id, user.id);

    let promoted = storage
        .change_user_role(&user.id, UserRole::Expert)
        .await
        .expect("change role")
        .expect("user exists");
    assert_eq!(promoted.role, UserRole::Expert);
    assert_eq!(promoted.username, "carol");
    assert_eq!(storage.count_users().await.expect("count"), 1);
}

#[tokio::test]
async fn test_chapters_and_lessons_list_in_authoring_order() {
    let storage = common::memory_storage().await;
    let author = common::seed_user(&storage, "author", UserRole::Expert).await;
    let course = common::seed_course(&storage, &author, "Ordering").await;

    let mut chapter_ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let chapter = storage
            .create_chapter(
                &course.id,
                &author.id,
                CreateChapterRequest {
                    title: title.to_string(),
                    description: String::new(),
                },
            )
            .await
            .expect("chapter");
        chapter_ids.push(chapter.id);
    }

    let listed: Vec<String> = storage
        .list_chapters_by_course_id(&course.id, Page::new(10, 0))
        .await
        .expect("list")
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, chapter_ids);

    for title in ["Intro", "Body"] {
        storage
            .create_lesson(
                &chapter_ids[0],
                &author.id,
                CreateLessonRequest {
                    title: title.to_string(),
                    description: String::new(),
                    content: String::new(),
                },
            )
            .await
            .expect("lesson");
    }
    let titles: Vec<String> = storage
        .list_lessons_by_chapter_id(&chapter_ids[0], Page::new(10, 0))
        .await
        .expect("list")
        .into_iter()
        .map(|l| l.title)
        .collect();
    assert_eq!(titles, ["Intro", "Body"]);
}
