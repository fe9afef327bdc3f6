use super::entities::CourseLevel;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 课程列表查询参数（来自HTTP请求）
//
// level / category_id / author_id 均支持逗号分隔的多个值，
// 例如 `?level=BEGINNER,ADVANCED&category_id=a,b`
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub level: Option<String>,
    pub category_id: Option<String>,
    pub author_id: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub search: Option<String>,
    pub levels: Vec<CourseLevel>,
    pub category_ids: Vec<String>,
    pub author_ids: Vec<String>,
}

impl CourseListParams {
    /// 拆分逗号分隔的筛选条件，非法的难度值返回错误信息
    pub fn to_query(&self) -> Result<CourseListQuery, String> {
        let levels = split_csv(self.level.as_deref())
            .into_iter()
            .map(|level| level.parse::<CourseLevel>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CourseListQuery {
            search: self.search.clone(),
            levels,
            category_ids: split_csv(self.category_id.as_deref()),
            author_ids: split_csv(self.author_id.as_deref()),
        })
    }
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

// 创建课程请求，作者为当前登录用户
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub category_id: String,
}

// 更新课程请求
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<CourseLevel>,
    pub image: Option<String>,
    pub is_public: Option<bool>,
    pub category_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_csv_filters_split() {
        let params = Query::<CourseListParams>::from_query(
            "search=rust&level=BEGINNER,%20ADVANCED&category_id=a,,b&limit=5",
        )
        .expect("query")
        .into_inner();
        let query = params.to_query().expect("valid filters");

        assert_eq!(query.search.as_deref(), Some("rust"));
        assert_eq!(
            query.levels,
            vec![CourseLevel::Beginner, CourseLevel::Advanced]
        );
        assert_eq!(query.category_ids, vec!["a".to_string(), "b".to_string()]);
        assert!(query.author_ids.is_empty());
        assert_eq!(params.pagination.page(10).limit, 5);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let params = Query::<CourseListParams>::from_query("level=BEGINNER,GURU")
            .expect("query")
            .into_inner();
        assert!(params.to_query().is_err());
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateCourseRequest = serde_json::from_str(
            r#"{"title":"Rust","description":"d","level":"BEGINNER","category_id":"c"}"#,
        )
        .expect("valid request");
        assert!(!req.is_public);
        assert!(req.image.is_none());
    }
}
