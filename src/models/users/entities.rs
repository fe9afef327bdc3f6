use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,   // 学员
    Expert, // 讲师，可创建并维护自己的课程
    Staff,  // 运营人员，可管理分类与用户
}

impl UserRole {
    pub const USER: &'static str = "USER";
    pub const EXPERT: &'static str = "EXPERT";
    pub const STAFF: &'static str = "STAFF";

    pub const ALL: [&'static str; 3] = [Self::USER, Self::EXPERT, Self::STAFF];

    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Staff]
    }
    /// 除普通学员外的所有角色
    pub fn author_roles() -> &'static [&'static UserRole] {
        &[&Self::Expert, &Self::Staff]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Role must be one of {:?}, got '{s}'",
                UserRole::ALL
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "{}", UserRole::USER),
            UserRole::Expert => write!(f, "{}", UserRole::EXPERT),
            UserRole::Staff => write!(f, "{}", UserRole::STAFF),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::USER => Ok(UserRole::User),
            UserRole::EXPERT => Ok(UserRole::Expert),
            UserRole::STAFF => Ok(UserRole::Staff),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub gender: bool,
    pub dob: chrono::NaiveDate,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_strings() {
        for name in UserRole::ALL {
            let parsed: UserRole = name.parse().expect("known role");
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Expert).expect("serialize"),
            r#""EXPERT""#
        );
    }

    #[test]
    fn test_lowercase_role_rejected() {
        assert!(serde_json::from_str::<UserRole>(r#""staff""#).is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: "u".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "secret-hash".into(),
            full_name: "Alice".into(),
            role: UserRole::User,
            gender: false,
            dob: chrono::NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            phone: "123".into(),
            address: "here".into(),
            bio: "".into(),
            avatar: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
