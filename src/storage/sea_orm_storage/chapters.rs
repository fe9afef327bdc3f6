use super::{SeaOrmStorage, crud};
use crate::entity::chapters::{ActiveModel, Column, Entity as Chapters};
use crate::errors::Result;
use crate::models::{
    Page,
    chapters::{
        entities::Chapter,
        requests::{CreateChapterRequest, UpdateChapterRequest},
    },
};
use sea_orm::{Set, sea_query::Order};

impl SeaOrmStorage {
    pub async fn create_chapter_impl(
        &self,
        course_id: &str,
        author_id: &str,
        req: CreateChapterRequest,
    ) -> Result<Chapter> {
        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            course_id: Set(course_id.to_string()),
            author_id: Set(author_id.to_string()),
            ..Default::default()
        };

        let created = crud::create::<Chapters, _>(&self.db, model).await?;
        Ok(created.into_chapter())
    }

    pub async fn get_chapter_by_id_impl(&self, id: &str) -> Result<Option<Chapter>> {
        let result = crud::find_by_id::<Chapters>(&self.db, id).await?;
        Ok(result.map(|m| m.into_chapter()))
    }

    pub async fn list_chapters_by_course_id_impl(
        &self,
        course_id: &str,
        page: Page,
    ) -> Result<Vec<Chapter>> {
        // 课程内按编写顺序排列
        let chapters = crud::find_all_by_attr_in_order::<Chapters, _>(
            &self.db,
            Column::CourseId,
            course_id,
            page,
            Order::Asc,
        )
        .await?;
        Ok(chapters.into_iter().map(|m| m.into_chapter()).collect())
    }

    pub async fn update_chapter_impl(
        &self,
        id: &str,
        update: UpdateChapterRequest,
    ) -> Result<Option<Chapter>> {
        let mut model = ActiveModel::default();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }

        let updated = crud::update_by_id::<Chapters, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_chapter()))
    }

    pub async fn delete_chapter_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Chapters>(&self.db, id).await
    }
}
