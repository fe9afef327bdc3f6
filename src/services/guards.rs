//! 路由处理共用的守卫
//!
//! 守卫返回 `Result<T, HttpResponse>`：`Err` 中是已经构造好的错误响应，
//! 由 [`guard!`] 宏直接返回给客户端。

use actix_web::{HttpRequest, HttpResponse, http::StatusCode};
use tracing::error;

use crate::errors::LmsError;
use crate::middlewares::RequireJWT;
use crate::models::{AuthorRelated, CourseRelated, ErrorCode, ErrorResponse, users::entities::User};
use crate::storage::Storage;

pub type GuardResult<T> = Result<T, HttpResponse>;

/// 解包守卫结果，失败时从当前处理函数返回错误响应
#[macro_export]
macro_rules! guard {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(response) => return Ok(response),
        }
    };
}

pub fn error_response(status: StatusCode, code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, detail))
}

pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, code, detail)
}

pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, code, detail)
}

pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::FORBIDDEN, code, detail)
}

pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::CONFLICT, code, detail)
}

/// 存储层错误映射：唯一约束 409，外键约束 400，其余 500 并记录日志
pub fn storage_error(context: &str, err: LmsError) -> HttpResponse {
    match err {
        LmsError::UniqueViolation(msg) => {
            error_response(StatusCode::CONFLICT, ErrorCode::Conflict, format!("{context}: {msg}"))
        }
        LmsError::ForeignKeyViolation(msg) => error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            format!("{context}: referenced resource does not exist ({msg})"),
        ),
        other => {
            error!("{}: {}", context, other);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                format!("{context}: {}", other.message()),
            )
        }
    }
}

/// 把存储层 `Result` 转为守卫结果
pub fn stored<T>(result: crate::errors::Result<T>, context: &str) -> GuardResult<T> {
    result.map_err(|e| storage_error(context, e))
}

/// 存在性守卫：记录不存在时返回 404
pub fn require_existed<T>(
    result: crate::errors::Result<Option<T>>,
    code: ErrorCode,
    name: &str,
) -> GuardResult<T> {
    match result {
        Ok(Some(entity)) => Ok(entity),
        Ok(None) => Err(not_found(code, format!("{name} not found"))),
        Err(e) => Err(storage_error(&format!("Failed to load {name}"), e)),
    }
}

/// 归属守卫：仅作者本人可以操作，否则 403
pub fn require_author<T: AuthorRelated>(entity: &T, user: &User) -> GuardResult<()> {
    if entity.author_id() == user.id {
        Ok(())
    } else {
        Err(forbidden(
            ErrorCode::Forbidden,
            "You are not the author of this resource",
        ))
    }
}

/// 选课守卫：用户必须已选修资源所属课程，否则 403
pub async fn require_enrolled<T: CourseRelated>(
    storage: &dyn Storage,
    resource: &T,
    user: &User,
    detail: &str,
) -> GuardResult<()> {
    let enrolled = stored(
        storage
            .exist_enrollment_by_user_id_and_course_id(&user.id, resource.course_id())
            .await,
        "Failed to check enrollment",
    )?;

    if enrolled {
        Ok(())
    } else {
        Err(forbidden(ErrorCode::NotEnrolled, detail))
    }
}

/// RequireJWT 之后取当前用户
pub fn current_user(request: &HttpRequest) -> GuardResult<User> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        error_response(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )
    })
}

/// 请求体字段校验失败时返回 400
pub fn validated(result: Result<(), String>, code: ErrorCode) -> GuardResult<()> {
    result.map_err(|msg| bad_request(code, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    struct Owned(&'static str);

    impl AuthorRelated for Owned {
        fn author_id(&self) -> &str {
            self.0
        }
    }

    fn user(id: &str, role: UserRole) -> User {
        User {
            id: id.to_string(),
            username: "someone".into(),
            email: "someone@example.com".into(),
            password_hash: String::new(),
            full_name: "Some One".into(),
            role,
            gender: true,
            dob: chrono::NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            phone: String::new(),
            address: String::new(),
            bio: String::new(),
            avatar: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_require_author_matches_id_only() {
        assert!(require_author(&Owned("a"), &user("a", UserRole::User)).is_ok());

        let denied = require_author(&Owned("a"), &user("b", UserRole::Staff))
            .expect_err("staff is not the author");
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_require_existed_statuses() {
        let found = require_existed(Ok(Some(1)), ErrorCode::CourseNotFound, "Course");
        assert_eq!(found.ok(), Some(1));

        let missing = require_existed::<i32>(Ok(None), ErrorCode::CourseNotFound, "Course")
            .expect_err("missing");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let failed = require_existed::<i32>(
            Err(LmsError::database_operation("boom")),
            ErrorCode::CourseNotFound,
            "Course",
        )
        .expect_err("storage failure");
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_constraint_mapping() {
        assert_eq!(
            storage_error("x", LmsError::unique_violation("dup")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_error("x", LmsError::foreign_key_violation("fk")).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
