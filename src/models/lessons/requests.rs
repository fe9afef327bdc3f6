use serde::Deserialize;

// 创建课时请求，chapter_id 与 author_id 继承自所属章节
#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub title: String,
    pub description: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLessonRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}
