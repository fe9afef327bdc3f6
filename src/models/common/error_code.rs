use serde::{Serialize, Serializer};

// 业务错误码，随错误响应体一同返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1005,
    InternalServerError = 1006,

    // 认证与用户 2xxx
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNotFound = 2100,
    UserNameAlreadyExists = 2101,
    UserEmailAlreadyExists = 2102,
    UserNameInvalid = 2103,
    UserEmailInvalid = 2104,
    UserPasswordInvalid = 2105,
    UserUpdateFailed = 2106,
    CanNotDeleteCurrentUser = 2107,

    // 课程体系 3xxx
    CategoryNotFound = 3000,
    CourseNotFound = 3100,
    CourseLevelInvalid = 3101,
    CoursePermissionDenied = 3102,
    ChapterNotFound = 3200,
    LessonNotFound = 3300,
    EnrollmentNotFound = 3400,
    AlreadyEnrolled = 3401,
    NotEnrolled = 3402,
    FeedbackNotFound = 3500,
    FeedbackAlreadyExists = 3501,
    FeedbackRatingInvalid = 3502,
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}
