/// API 业务错误码
///
/// 按模块分段：1xxx 请求，2xxx 认证，3xxx 用户，4xxx 学生，
/// 5xxx 课程，6xxx 评价，7xxx 设置，8xxx 文件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用请求错误
    BadRequest = 1000,
    InvalidParameter = 1001,
    NotFound = 1004,
    InternalServerError = 1500,

    // 认证
    Unauthorized = 2001,
    AuthFailed = 2002,
    Forbidden = 2003,
    AccountInactive = 2004,
    RegisterFailed = 2005,

    // 用户
    UserNotFound = 3001,
    UserNameInvalid = 3002,
    UserEmailInvalid = 3003,
    UserEmailAlreadyExists = 3004,
    UserPasswordInvalid = 3005,
    UserCreationFailed = 3006,
    UserUpdateFailed = 3007,
    UserDeleteFailed = 3008,
    CanNotDeleteCurrentUser = 3009,
    CanNotChangeOwnStatus = 3010,

    // 学生
    StudentNotFound = 4001,
    StudentValidationFailed = 4002,
    StudentEmailAlreadyExists = 4003,
    StudentCreationFailed = 4004,
    StudentUpdateFailed = 4005,
    StudentDeleteFailed = 4006,

    // 课程
    CourseNotFound = 5001,
    CourseValidationFailed = 5002,
    CourseCreationFailed = 5003,
    CourseUpdateFailed = 5004,
    CourseDeleteFailed = 5005,

    // 评价
    ReviewNotFound = 6001,
    ReviewValidationFailed = 6002,
    ReviewCreationFailed = 6003,
    ReviewUpdateFailed = 6004,
    ReviewDeleteFailed = 6005,

    // 设置
    SettingsValidationFailed = 7001,
    SettingsUpdateFailed = 7002,

    // 文件
    FileNotFound = 8001,
    FilePathInvalid = 8002,
}

impl ErrorCode {
    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }
}
