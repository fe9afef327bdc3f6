mod common;

use rust_coursehub::entity::categories;
use rust_coursehub::models::Page;
use rust_coursehub::storage::sea_orm_storage::crud;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

fn category(name: &str) -> categories::ActiveModel {
    categories::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_then_find_by_id() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    let created = crud::create::<categories::Entity, _>(db, category("Rust"))
        .await
        .expect("create");
    assert_eq!(created.id.len(), 36);
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = crud::find_by_id::<categories::Entity>(db, &created.id)
        .await
        .expect("find")
        .expect("row exists");
    assert_eq!(found, created);
    assert_eq!(found.name, "Rust");
}

#[tokio::test]
async fn test_update_by_id_applies_only_set_fields() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    let created = crud::create::<categories::Entity, _>(db, category("Before"))
        .await
        .expect("create");

    // 只更新 updated_at，name 保持不变
    let untouched = crud::update_by_id::<categories::Entity, _>(
        db,
        &created.id,
        categories::ActiveModel::default(),
    )
    .await
    .expect("update")
    .expect("row exists");
    assert_eq!(untouched.name, "Before");
    assert_eq!(untouched.created_at, created.created_at);

    let renamed = crud::update_by_id::<categories::Entity, _>(db, &created.id, category("After"))
        .await
        .expect("update")
        .expect("row exists");
    assert_eq!(renamed.name, "After");
    assert_eq!(renamed.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_row_returns_none() {
    let storage = common::memory_storage().await;
    let updated = crud::update_by_id::<categories::Entity, _>(
        storage.connection(),
        &crud::new_id(),
        category("Ghost"),
    )
    .await
    .expect("update");
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_then_find_returns_none() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    let created = crud::create::<categories::Entity, _>(db, category("Temp"))
        .await
        .expect("create");
    assert!(crud::delete_by_id::<categories::Entity>(db, &created.id).await.expect("delete"));
    assert!(
        crud::find_by_id::<categories::Entity>(db, &created.id)
            .await
            .expect("find")
            .is_none()
    );
    // 再次删除没有行受影响
    assert!(!crud::delete_by_id::<categories::Entity>(db, &created.id).await.expect("delete"));
}

#[tokio::test]
async fn test_find_all_window_matches_full_listing() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    for name in ["First", "Second", "Third"] {
        crud::create::<categories::Entity, _>(db, category(name))
            .await
            .expect("create");
    }

    let all = crud::find_all::<categories::Entity>(db, Page::new(100, 0))
        .await
        .expect("list");
    assert_eq!(all.len(), 3);

    let window = crud::find_all::<categories::Entity>(db, Page::new(1, 1))
        .await
        .expect("list");
    assert_eq!(window.len(), 1);
    assert_eq!(window[0], all[1]);
}

#[tokio::test]
async fn test_attr_queries() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    for name in ["Shared", "Shared", "Other"] {
        crud::create::<categories::Entity, _>(db, category(name))
            .await
            .expect("create");
    }

    let shared = crud::find_all_by_attr::<categories::Entity, _>(
        db,
        categories::Column::Name,
        "Shared",
        Page::new(10, 0),
    )
    .await
    .expect("list");
    assert_eq!(shared.len(), 2);

    let count = crud::count_by_attr::<categories::Entity, _>(db, categories::Column::Name, "Shared")
        .await
        .expect("count");
    assert_eq!(count, 2);

    let other = crud::find_by_attr::<categories::Entity, _>(db, categories::Column::Name, "Other")
        .await
        .expect("find")
        .expect("row exists");
    assert_eq!(other.name, "Other");

    assert_eq!(crud::count_all::<categories::Entity>(db).await.expect("count"), 3);
    assert!(
        !crud::exists(
            db,
            categories::Entity::find().filter(categories::Column::Name.eq("Missing"))
        )
        .await
        .expect("exists")
    );
}

#[tokio::test]
async fn test_rows_created_in_same_second_list_newest_first() {
    let storage = common::memory_storage().await;
    let db = storage.connection();

    for round in 0..5 {
        let names: Vec<String> = (0..3).map(|i| format!("r{round}-c{i}")).collect();
        for name in &names {
            crud::create::<categories::Entity, _>(db, category(name))
                .await
                .expect("create");
        }

        let newest: Vec<String> = crud::find_all::<categories::Entity>(db, Page::new(3, 0))
            .await
            .expect("list")
            .into_iter()
            .map(|m| m.name)
            .collect();
        let expected: Vec<String> = names.iter().rev().cloned().collect();
        assert_eq!(newest, expected);
    }
}

#[test]
fn test_new_ids_sort_in_creation_order() {
    let ids: Vec<String> = (0..50).map(|_| crud::new_id()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
