use super::entities::UserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用户注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub gender: bool,
    pub dob: chrono::NaiveDate,
    pub phone: String,
    pub address: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

// 用户资料更新请求，仅更新提供的字段
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub gender: Option<bool>,
    pub dob: Option<chrono::NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

// 修改密码请求
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// 修改角色请求，role 必须是已定义的角色之一
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_role_accepts_known_role() {
        let req: ChangeRoleRequest =
            serde_json::from_str(r#"{"role":"EXPERT"}"#).expect("valid role");
        assert_eq!(req.role, UserRole::Expert);
    }

    #[test]
    fn test_change_role_rejects_unknown_role() {
        let err = serde_json::from_str::<ChangeRoleRequest>(r#"{"role":"ADMIN"}"#)
            .expect_err("ADMIN is not a defined role");
        assert!(err.to_string().contains("Role must be one of"));
    }

    #[test]
    fn test_update_request_fields_optional() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"bio":"hello"}"#).expect("partial update");
        assert_eq!(req.bio.as_deref(), Some("hello"));
        assert!(req.full_name.is_none());
        assert!(req.dob.is_none());
    }

    #[test]
    fn test_create_request_parses_date() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{
                "username": "alice_01",
                "password": "Secret123",
                "email": "alice@example.com",
                "full_name": "Alice",
                "gender": true,
                "dob": "1999-12-31",
                "phone": "0123456789",
                "address": "Somewhere",
                "bio": ""
            }"#,
        )
        .expect("valid request");
        assert_eq!(
            req.dob,
            chrono::NaiveDate::from_ymd_opt(1999, 12, 31).expect("valid date")
        );
        assert!(req.avatar.is_none());
    }
}
