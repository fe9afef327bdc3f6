use serde::{Deserialize, Serialize};

use crate::models::{AuthorRelated, CourseRelated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub rating: f64,
    pub comment: String,
    pub user_id: String,
    pub course_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 评价归属于发表评价的用户
impl AuthorRelated for Feedback {
    fn author_id(&self) -> &str {
        &self.user_id
    }
}

impl CourseRelated for Feedback {
    fn course_id(&self) -> &str {
        &self.course_id
    }
}
