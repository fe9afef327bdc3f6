use serde::Serialize;

// 课程评分汇总
#[derive(Debug, Serialize)]
pub struct CourseRatingResponse {
    pub course_id: String,
    pub average: f64,
    pub count: u64,
}
