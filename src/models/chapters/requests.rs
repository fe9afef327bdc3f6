use serde::Deserialize;

// 创建章节请求，course_id 与 author_id 由所属课程决定
#[derive(Debug, Deserialize)]
pub struct CreateChapterRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateChapterRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}
