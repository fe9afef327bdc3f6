use super::{SeaOrmStorage, crud};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{LmsError, Result};
use crate::models::{
    Page, courses::entities::Course, enrollments::entities::Enrollment, users::entities::User,
};
use crate::utils::contains_pattern;
use sea_orm::{ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Set};

impl SeaOrmStorage {
    /// 选课，同一用户对同一课程由唯一索引约束
    pub async fn create_enrollment_impl(&self, user_id: &str, course_id: &str) -> Result<Enrollment> {
        let model = ActiveModel {
            user_id: Set(user_id.to_string()),
            course_id: Set(course_id.to_string()),
            ..Default::default()
        };

        let created = crud::create::<Enrollments, _>(&self.db, model).await?;
        Ok(created.into_enrollment())
    }

    pub async fn get_enrollment_by_user_id_and_course_id_impl(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::from_db("find enrollment failed", e))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn exist_enrollment_by_user_id_and_course_id_impl(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool> {
        crud::exists(
            &self.db,
            Enrollments::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::CourseId.eq(course_id)),
        )
        .await
    }

    pub async fn delete_enrollment_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Enrollments>(&self.db, id).await
    }

    /// 用户已选课程，可按课程标题模糊搜索
    pub async fn list_courses_by_user_id_impl(
        &self,
        user_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<Course>> {
        let mut select = Courses::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::courses::Relation::Enrollments.def(),
            )
            .filter(Column::UserId.eq(user_id));

        let search = search.trim();
        if !search.is_empty() {
            select = select.filter(CourseColumn::Title.like(contains_pattern(search)));
        }

        let courses = crud::paged(select, page)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::from_db("list enrolled course failed", e))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 课程学员，可按姓名模糊搜索
    pub async fn list_users_by_course_id_impl(
        &self,
        course_id: &str,
        search: &str,
        page: Page,
    ) -> Result<Vec<User>> {
        let mut select = Users::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::users::Relation::Enrollments.def(),
            )
            .filter(Column::CourseId.eq(course_id));

        let search = search.trim();
        if !search.is_empty() {
            select = select.filter(UserColumn::FullName.like(contains_pattern(search)));
        }

        let users = crud::paged(select, page)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::from_db("list course student failed", e))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    pub async fn count_enrollments_by_course_id_impl(&self, course_id: &str) -> Result<u64> {
        crud::count_by_attr::<Enrollments, _>(&self.db, Column::CourseId, course_id).await
    }
}
