use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 选课相关列表查询（我的课程 / 课程学员）
#[derive(Debug, Deserialize)]
pub struct EnrollmentSearchParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default)]
    pub search: String,
}
