use super::{SeaOrmStorage, crud};
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks};
use crate::errors::{LmsError, Result};
use crate::models::{
    Page,
    feedbacks::{
        entities::Feedback,
        requests::{CreateFeedbackRequest, UpdateFeedbackRequest},
    },
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

impl SeaOrmStorage {
    pub async fn create_feedback_impl(
        &self,
        user_id: &str,
        course_id: &str,
        req: CreateFeedbackRequest,
    ) -> Result<Feedback> {
        let model = ActiveModel {
            rating: Set(req.rating),
            comment: Set(req.comment),
            user_id: Set(user_id.to_string()),
            course_id: Set(course_id.to_string()),
            ..Default::default()
        };

        let created = crud::create::<Feedbacks, _>(&self.db, model).await?;
        Ok(created.into_feedback())
    }

    pub async fn get_feedback_by_id_impl(&self, id: &str) -> Result<Option<Feedback>> {
        let result = crud::find_by_id::<Feedbacks>(&self.db, id).await?;
        Ok(result.map(|m| m.into_feedback()))
    }

    pub async fn get_feedback_by_user_id_and_course_id_impl(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Feedback>> {
        let result = Feedbacks::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::from_db("find feedback failed", e))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    pub async fn exist_feedback_by_user_id_and_course_id_impl(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool> {
        crud::exists(
            &self.db,
            Feedbacks::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::CourseId.eq(course_id)),
        )
        .await
    }

    pub async fn list_feedbacks_by_course_id_impl(
        &self,
        course_id: &str,
        page: Page,
    ) -> Result<Vec<Feedback>> {
        let feedbacks =
            crud::find_all_by_attr::<Feedbacks, _>(&self.db, Column::CourseId, course_id, page)
                .await?;
        Ok(feedbacks.into_iter().map(|m| m.into_feedback()).collect())
    }

    pub async fn update_feedback_impl(
        &self,
        id: &str,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<Feedback>> {
        let mut model = ActiveModel::default();

        if let Some(rating) = update.rating {
            model.rating = Set(rating);
        }
        if let Some(comment) = update.comment {
            model.comment = Set(comment);
        }

        let updated = crud::update_by_id::<Feedbacks, _>(&self.db, id, model).await?;
        Ok(updated.map(|m| m.into_feedback()))
    }

    pub async fn delete_feedback_impl(&self, id: &str) -> Result<bool> {
        crud::delete_by_id::<Feedbacks>(&self.db, id).await
    }

    pub async fn count_feedbacks_by_course_id_impl(&self, course_id: &str) -> Result<u64> {
        crud::count_by_attr::<Feedbacks, _>(&self.db, Column::CourseId, course_id).await
    }

    /// 课程平均评分，没有评价时为 0
    pub async fn average_rating_by_course_id_impl(&self, course_id: &str) -> Result<f64> {
        let average = Feedbacks::find()
            .filter(Column::CourseId.eq(course_id))
            .select_only()
            .column_as(Column::Rating.avg(), "average")
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| LmsError::from_db("average course rating failed", e))?
            .flatten()
            .unwrap_or(0.0);

        Ok(average)
    }
}
