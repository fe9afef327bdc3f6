use serde::{Deserialize, Serialize};

use crate::models::{AuthorRelated, CourseRelated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录归属于选课用户
impl AuthorRelated for Enrollment {
    fn author_id(&self) -> &str {
        &self.user_id
    }
}

impl CourseRelated for Enrollment {
    fn course_id(&self) -> &str {
        &self.course_id
    }
}
