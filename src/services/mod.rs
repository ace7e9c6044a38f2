pub mod auth;
pub mod courses;
pub mod health;
pub mod reviews;
pub mod settings;
pub mod students;
pub mod uploads;
pub mod users;

pub use auth::AuthService;
pub use courses::CourseService;
pub use health::HealthService;
pub use reviews::ReviewService;
pub use settings::SettingsService;
pub use students::StudentService;
pub use uploads::UploadService;
pub use users::UserService;
