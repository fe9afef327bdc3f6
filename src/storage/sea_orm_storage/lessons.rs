use super::{SeaOrmStorage, crud};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::Result;
use crate::models::{
    Page,
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, UpdateLessonRequest},
    },
};
use sea_orm::{Set, sea_query::Order};

impl SeaOrmStorage {
    pub async fn create_lesson_impl(
        &self,
        chapter_id: &str,
        author_id: &str,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            content: Set(req.content),
            chapter_id: Set(chapter_id.to_string()),
            author_id: Set(author_id.to_string()),
            ..Default::default()
        };

        let created = crud::create::<Lessons, _>(&self.db, model).await?;
        Ok(created.into_lesson())
    }

    pub async fn get_lesson_by_id_impl(&self, id: &str) -> Result<Option<Lesson>> {
        let result = crud::find_by_id::<Lessons>(&self.db, id).await?;
        Ok(result.map(|m| m.into_lesson()))
    }

    pub async fn list_lessons_by_chapter_id_impl(
        &self,
        chapter_id: &str,
        page: Page,
    ) -> Result<Vec<Lesson>> {
        // 课程内按编写顺序排列
        let lessons = crud::find_all_by_attr_in_order::<Lessons, _>(
            &self.db,
            Column::ChapterId,
            chapter_id,
            page,
            Order::Asc,
        )
        .await?;
        Ok(lessons.into_iter().map(|m| m.into_lesson()).collect())
    }

    pub async fn update_lesson_impl(
        &self,
        id: &str,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let mut model = ActiveModel::default();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }

        let updated = crud::update_by_id::<Lessons, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_lesson()))
    }

    pub async fn delete_lesson_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Lessons>(&self.db, id).await
    }
}
