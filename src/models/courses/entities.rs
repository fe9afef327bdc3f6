use serde::{Deserialize, Serialize};

use crate::models::{AuthorRelated, CourseRelated};

// 课程难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const BEGINNER: &'static str = "BEGINNER";
    pub const INTERMEDIATE: &'static str = "INTERMEDIATE";
    pub const ADVANCED: &'static str = "ADVANCED";

    pub const ALL: [&'static str; 3] = [Self::BEGINNER, Self::INTERMEDIATE, Self::ADVANCED];
}

impl<'de> Deserialize<'de> for CourseLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CourseLevel>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Level must be one of {:?}, got '{s}'",
                CourseLevel::ALL
            ))
        })
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Beginner => write!(f, "{}", CourseLevel::BEGINNER),
            CourseLevel::Intermediate => write!(f, "{}", CourseLevel::INTERMEDIATE),
            CourseLevel::Advanced => write!(f, "{}", CourseLevel::ADVANCED),
        }
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseLevel::BEGINNER => Ok(CourseLevel::Beginner),
            CourseLevel::INTERMEDIATE => Ok(CourseLevel::Intermediate),
            CourseLevel::ADVANCED => Ok(CourseLevel::Advanced),
            _ => Err(format!("Invalid course level: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: CourseLevel,
    pub image: Option<String>,
    pub is_public: bool,
    pub category_id: String,
    pub author_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AuthorRelated for Course {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}

// 课程本身就是所属课程
impl CourseRelated for Course {
    fn course_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("BEGINNER".parse::<CourseLevel>(), Ok(CourseLevel::Beginner));
        assert_eq!(
            "ADVANCED".parse::<CourseLevel>(),
            Ok(CourseLevel::Advanced)
        );
        assert!("EXPERT".parse::<CourseLevel>().is_err());
        assert!("beginner".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn test_level_deserialize_error_message() {
        let err = serde_json::from_str::<CourseLevel>(r#""MASTER""#).expect_err("unknown level");
        assert!(err.to_string().contains("Level must be one of"));
    }

    #[test]
    fn test_level_display_matches_wire() {
        assert_eq!(CourseLevel::Intermediate.to_string(), "INTERMEDIATE");
        assert_eq!(
            serde_json::to_string(&CourseLevel::Intermediate).expect("serialize"),
            r#""INTERMEDIATE""#
        );
    }
}
