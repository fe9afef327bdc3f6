pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::storage::Storage;

pub struct CategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl CategoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_categories(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_categories(self, query, request).await
    }

    pub async fn create_category(
        &self,
        data: CreateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_category(self, data, request).await
    }

    pub async fn update_category(
        &self,
        category_id: &str,
        data: UpdateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_category(self, category_id, data, request).await
    }

    pub async fn delete_category(
        &self,
        category_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_category(self, category_id, request).await
    }
}
