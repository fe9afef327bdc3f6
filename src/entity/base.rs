//! 基础实体约定
//!
//! 所有实体都拥有 UUID 字符串主键以及 `created_at` / `updated_at` 两个
//! unix 时间戳列。通用 CRUD（见 `storage::sea_orm_storage::crud`）只依赖
//! 这里暴露的列信息，不关心具体实体类型。

use sea_orm::EntityTrait;

pub trait BaseEntity: EntityTrait {
    /// 日志与错误信息中使用的实体名称
    const NAME: &'static str;

    fn id_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
}

/// 为实体模块中的 `Entity` 实现 [`BaseEntity`]
///
/// 要求模块内存在 `Column::Id`、`Column::CreatedAt`、`Column::UpdatedAt`。
macro_rules! impl_base_entity {
    ($name:literal) => {
        impl $crate::entity::base::BaseEntity for Entity {
            const NAME: &'static str = $name;

            fn id_column() -> Column {
                Column::Id
            }

            fn created_at_column() -> Column {
                Column::CreatedAt
            }

            fn updated_at_column() -> Column {
                Column::UpdatedAt
            }
        }
    };
}
