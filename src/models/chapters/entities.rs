use serde::{Deserialize, Serialize};

use crate::models::{AuthorRelated, CourseRelated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub author_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AuthorRelated for Chapter {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}

impl CourseRelated for Chapter {
    fn course_id(&self) -> &str {
        &self.course_id
    }
}
