use super::{SeaOrmStorage, crud};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{LmsError, Result};
use crate::models::{
    Page,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建课程，作者为 `author_id`
    pub async fn create_course_impl(
        &self,
        author_id: &str,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            level: Set(req.level.to_string()),
            image: Set(req.image),
            is_public: Set(req.is_public),
            category_id: Set(req.category_id),
            author_id: Set(author_id.to_string()),
            ..Default::default()
        };

        let created = crud::create::<Courses, _>(&self.db, model).await?;
        Ok(created.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: &str) -> Result<Option<Course>> {
        let result = crud::find_by_id::<Courses>(&self.db, id).await?;
        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程：标题模糊搜索 + 难度/分类/作者多值筛选
    pub async fn list_courses_impl(&self, query: CourseListQuery, page: Page) -> Result<Vec<Course>> {
        let mut select = Courses::find();

        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            select = select.filter(Column::Title.like(contains_pattern(search)));
        }

        if !query.levels.is_empty() {
            select = select.filter(
                Column::Level.is_in(query.levels.iter().map(|level| level.to_string())),
            );
        }

        if !query.category_ids.is_empty() {
            select = select.filter(Column::CategoryId.is_in(query.category_ids));
        }

        if !query.author_ids.is_empty() {
            select = select.filter(Column::AuthorId.is_in(query.author_ids));
        }

        let courses = crud::paged(select, page)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::from_db("list course failed", e))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn update_course_impl(
        &self,
        id: &str,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let mut model = ActiveModel::default();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(level) = update.level {
            model.level = Set(level.to_string());
        }
        if let Some(image) = update.image {
            model.image = Set(Some(image));
        }
        if let Some(is_public) = update.is_public {
            model.is_public = Set(is_public);
        }
        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }

        let updated = crud::update_by_id::<Courses, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_course()))
    }

    /// 删除课程，章节、选课与评价随外键级联删除
    pub async fn delete_course_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Courses>(&self.db, id).await
    }
}
