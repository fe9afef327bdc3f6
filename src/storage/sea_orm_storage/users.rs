use super::{SeaOrmStorage, crud};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::Result;
use crate::models::{
    Page,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建用户，`password_hash` 由调用方预先计算
    pub async fn create_user_impl(
        &self,
        req: CreateUserRequest,
        password_hash: String,
        role: UserRole,
    ) -> Result<User> {
        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(password_hash),
            full_name: Set(req.full_name),
            role: Set(role.to_string()),
            gender: Set(req.gender),
            dob: Set(req.dob),
            phone: Set(req.phone),
            address: Set(req.address),
            bio: Set(req.bio),
            avatar: Set(req.avatar),
            ..Default::default()
        };

        let created = crud::create::<Users, _>(&self.db, model).await?;
        Ok(created.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<User>> {
        let result = crud::find_by_id::<Users>(&self.db, id).await?;
        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = crud::find_by_attr::<Users, _>(&self.db, Column::Username, username).await?;
        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = crud::find_by_attr::<Users, _>(&self.db, Column::Email, email).await?;
        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| crate::errors::LmsError::from_db("find user failed", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出用户，可按姓名模糊搜索
    pub async fn list_users_impl(&self, search: Option<&str>, page: Page) -> Result<Vec<User>> {
        let mut select = Users::find();

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            select = select.filter(Column::FullName.like(contains_pattern(search)));
        }

        let users = crud::paged(select, page)
            .all(&self.db)
            .await
            .map_err(|e| crate::errors::LmsError::from_db("list user failed", e))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户资料，仅写入提供的字段
    pub async fn update_user_impl(
        &self,
        id: &str,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let mut model = ActiveModel::default();

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(gender);
        }
        if let Some(dob) = update.dob {
            model.dob = Set(dob);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(address) = update.address {
            model.address = Set(address);
        }
        if let Some(bio) = update.bio {
            model.bio = Set(bio);
        }
        if let Some(avatar) = update.avatar {
            model.avatar = Set(Some(avatar));
        }

        let updated = crud::update_by_id::<Users, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_user()))
    }

    pub async fn change_user_role_impl(&self, id: &str, role: UserRole) -> Result<Option<User>> {
        let model = ActiveModel {
            role: Set(role.to_string()),
            ..Default::default()
        };

        let updated = crud::update_by_id::<Users, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_user()))
    }

    pub async fn change_user_password_impl(&self, id: &str, password_hash: String) -> Result<bool> {
        let model = ActiveModel {
            password_hash: Set(password_hash),
            ..Default::default()
        };

        let updated = crud::update_by_id::<Users, _>(&self.db, id, model).await?;
        Ok(updated.is_some())
    }

    pub async fn delete_user_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Users>(&self.db, id).await
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        crud::count_all::<Users>(&self.db).await
    }
}
