use super::{SeaOrmStorage, crud};
use crate::entity::categories::{ActiveModel, Entity as Categories};
use crate::errors::Result;
use crate::models::{
    Page,
    categories::{
        entities::Category,
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
    },
};
use sea_orm::Set;

impl SeaOrmStorage {
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let created = crud::create::<Categories, _>(&self.db, model).await?;
        Ok(created.into_category())
    }

    pub async fn get_category_by_id_impl(&self, id: &str) -> Result<Option<Category>> {
        let result = crud::find_by_id::<Categories>(&self.db, id).await?;
        Ok(result.map(|m| m.into_category()))
    }

    pub async fn list_categories_impl(&self, page: Page) -> Result<Vec<Category>> {
        let categories = crud::find_all::<Categories>(&self.db, page).await?;
        Ok(categories.into_iter().map(|m| m.into_category()).collect())
    }

    pub async fn update_category_impl(
        &self,
        id: &str,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let mut model = ActiveModel::default();
        if let Some(name) = update.name {
            model.name = Set(name);
        }

        let updated = crud::update_by_id::<Categories, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_category()))
    }

    pub async fn delete_category_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Categories>(&self.db, id).await
    }
}
