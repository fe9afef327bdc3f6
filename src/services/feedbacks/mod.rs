use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    feedbacks::{entities::Feedback, requests::UpdateFeedbackRequest},
};
use crate::services::guards::{
    GuardResult, current_user, require_author, require_existed, stored, validated,
};
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 评价只能由发表者本人修改或删除
    async fn load_own_feedback(
        &self,
        feedback_id: &str,
        request: &HttpRequest,
    ) -> GuardResult<Feedback> {
        let user = current_user(request)?;
        let feedback = require_existed(
            self.get_storage(request).get_feedback_by_id(feedback_id).await,
            ErrorCode::FeedbackNotFound,
            "Feedback",
        )?;
        require_author(&feedback, &user)?;
        Ok(feedback)
    }

    pub async fn update_feedback(
        &self,
        feedback_id: &str,
        data: UpdateFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guard!(validated(data.validate(), ErrorCode::FeedbackRatingInvalid));
        guard!(self.load_own_feedback(feedback_id, request).await);

        guard!(require_existed(
            self.get_storage(request)
                .update_feedback(feedback_id, data)
                .await,
            ErrorCode::FeedbackNotFound,
            "Feedback",
        ));

        Ok(HttpResponse::Ok().json(Detail::new("Updated")))
    }

    pub async fn delete_feedback(
        &self,
        feedback_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guard!(self.load_own_feedback(feedback_id, request).await);

        guard!(stored(
            self.get_storage(request).delete_feedback(feedback_id).await,
            "Failed to delete feedback",
        ));

        Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
    }
}
