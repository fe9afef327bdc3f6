//! 通用 CRUD 操作
//!
//! 所有实体共享的增删改查逻辑，依赖 [`BaseEntity`] 提供的主键与时间戳列。
//! 每次调用独立提交，不暴露事务。主键为按时间递增的 UUID v7，
//! 查询结果默认按 `created_at` 倒序、`id` 倒序排列，同一秒内也保持创建顺序。

use crate::entity::BaseEntity;
use crate::errors::{LmsError, Result};
use crate::models::Page;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
    sea_query::Order,
};

fn db_err<E: BaseEntity>(action: &'static str) -> impl FnOnce(DbErr) -> LmsError {
    move |e| LmsError::from_db(&format!("{action} {} failed", E::NAME), e)
}

/// 生成新的实体主键（UUID v7，字典序即创建顺序）
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// 按创建时间倒序（最新在前）并附加分页窗口
pub fn paged<E: BaseEntity>(select: Select<E>, page: Page) -> Select<E> {
    paged_in_order(select, page, Order::Desc)
}

/// 按创建时间指定方向排序并附加分页窗口
pub fn paged_in_order<E: BaseEntity>(select: Select<E>, page: Page, order: Order) -> Select<E> {
    select
        .order_by(E::created_at_column(), order.clone())
        .order_by(E::id_column(), order)
        .limit(page.limit)
        .offset(page.offset)
}

/// 插入实体：分配 UUID 主键并写入创建/更新时间
pub async fn create<E, A>(db: &DatabaseConnection, mut model: A) -> Result<E::Model>
where
    E: BaseEntity,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let now = chrono::Utc::now().timestamp();
    model.set(E::id_column(), Value::from(new_id()));
    model.set(E::created_at_column(), Value::from(now));
    model.set(E::updated_at_column(), Value::from(now));

    model.insert(db).await.map_err(db_err::<E>("create"))
}

/// 通过主键查找
pub async fn find_by_id<E: BaseEntity>(db: &DatabaseConnection, id: &str) -> Result<Option<E::Model>> {
    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await
        .map_err(db_err::<E>("find"))
}

/// 按列等值匹配，返回第一条
pub async fn find_by_attr<E, V>(
    db: &DatabaseConnection,
    column: E::Column,
    value: V,
) -> Result<Option<E::Model>>
where
    E: BaseEntity,
    V: Into<Value>,
{
    E::find()
        .filter(column.eq(value))
        .one(db)
        .await
        .map_err(db_err::<E>("find"))
}

/// 分页列出全部记录
pub async fn find_all<E: BaseEntity>(db: &DatabaseConnection, page: Page) -> Result<Vec<E::Model>> {
    paged(E::find(), page)
        .all(db)
        .await
        .map_err(db_err::<E>("list"))
}

/// 按列等值匹配并分页，最新在前
pub async fn find_all_by_attr<E, V>(
    db: &DatabaseConnection,
    column: E::Column,
    value: V,
    page: Page,
) -> Result<Vec<E::Model>>
where
    E: BaseEntity,
    V: Into<Value>,
{
    find_all_by_attr_in_order::<E, V>(db, column, value, page, Order::Desc).await
}

/// 按列等值匹配并分页，指定创建时间排序方向
pub async fn find_all_by_attr_in_order<E, V>(
    db: &DatabaseConnection,
    column: E::Column,
    value: V,
    page: Page,
    order: Order,
) -> Result<Vec<E::Model>>
where
    E: BaseEntity,
    V: Into<Value>,
{
    paged_in_order(E::find().filter(column.eq(value)), page, order)
        .all(db)
        .await
        .map_err(db_err::<E>("list"))
}

/// 按列等值匹配计数
pub async fn count_by_attr<E, V>(db: &DatabaseConnection, column: E::Column, value: V) -> Result<u64>
where
    E: BaseEntity,
    E::Model: Sync,
    V: Into<Value>,
{
    E::find()
        .filter(column.eq(value))
        .count(db)
        .await
        .map_err(db_err::<E>("count"))
}

/// 统计全部记录
pub async fn count_all<E>(db: &DatabaseConnection) -> Result<u64>
where
    E: BaseEntity,
    E::Model: Sync,
{
    E::find().count(db).await.map_err(db_err::<E>("count"))
}

/// 是否存在满足条件的记录
pub async fn exists<E>(db: &DatabaseConnection, select: Select<E>) -> Result<bool>
where
    E: BaseEntity,
    E::Model: Sync,
{
    let count = select.count(db).await.map_err(db_err::<E>("count"))?;
    Ok(count > 0)
}

/// 部分更新：仅写入 `model` 中已设置的列，并刷新 `updated_at`
///
/// 记录不存在时返回 `Ok(None)`。
pub async fn update_by_id<E, A>(
    db: &DatabaseConnection,
    id: &str,
    mut model: A,
) -> Result<Option<E::Model>>
where
    E: BaseEntity,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    if find_by_id::<E>(db, id).await?.is_none() {
        return Ok(None);
    }

    model.set(E::id_column(), Value::from(id.to_string()));
    model.set(
        E::updated_at_column(),
        Value::from(chrono::Utc::now().timestamp()),
    );

    let updated = model.update(db).await.map_err(db_err::<E>("update"))?;
    Ok(Some(updated))
}

/// 删除记录，返回是否有行被删除
pub async fn delete_by_id<E: BaseEntity>(db: &DatabaseConnection, id: &str) -> Result<bool> {
    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(db)
        .await
        .map_err(db_err::<E>("delete"))?;

    Ok(result.rows_affected > 0)
}
