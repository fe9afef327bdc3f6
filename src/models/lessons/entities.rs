use serde::{Deserialize, Serialize};

use crate::models::AuthorRelated;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub chapter_id: String,
    pub author_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AuthorRelated for Lesson {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}
