use serde::Deserialize;

/// 单页最大条数
pub const MAX_LIMIT: u64 = 100;

// 分页查询参数（limit / offset）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub offset: Option<u64>,
}

/// 已解析的分页窗口，传递给存储层
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl PaginationQuery {
    /// 按端点默认条数解析分页参数，limit 限制在 1..=MAX_LIMIT
    pub fn page(&self, default_limit: u64) -> Page {
        Page {
            limit: self.limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT),
            offset: self.offset.unwrap_or(0),
        }
    }
}

// 自定义反序列化函数，支持字符串到 u64 的转换（flatten 时查询参数均为字符串）
fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string containing one")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[derive(Debug, Deserialize)]
    struct Flattened {
        #[serde(flatten)]
        pagination: PaginationQuery,
        search: Option<String>,
    }

    #[test]
    fn test_defaults_apply() {
        let query = Query::<PaginationQuery>::from_query("").expect("empty query");
        assert_eq!(query.page(10), Page::new(10, 0));
        assert_eq!(query.page(100), Page::new(100, 0));
    }

    #[test]
    fn test_flattened_string_values() {
        let query = Query::<Flattened>::from_query("limit=5&offset=2&search=rust")
            .expect("flattened query");
        assert_eq!(query.pagination.page(10), Page::new(5, 2));
        assert_eq!(query.search.as_deref(), Some("rust"));
    }

    #[test]
    fn test_limit_is_clamped() {
        let query = Query::<PaginationQuery>::from_query("limit=1000").expect("query");
        assert_eq!(query.page(10).limit, MAX_LIMIT);

        let query = Query::<PaginationQuery>::from_query("limit=0").expect("query");
        assert_eq!(query.page(10).limit, 1);
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(Query::<PaginationQuery>::from_query("limit=abc").is_err());
        assert!(serde_json::from_str::<PaginationQuery>(r#"{"offset":-1}"#).is_err());
    }

    #[test]
    fn test_json_integers() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"limit":3,"offset":"4"}"#).expect("json");
        assert_eq!(query.page(10), Page::new(3, 4));
    }
}
