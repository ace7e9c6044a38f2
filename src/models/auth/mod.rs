pub mod requests;
pub mod responses;

pub use requests::{AdminRegisterRequest, LoginRequest, RegisterRequest};
pub use responses::{LoginResponse, RefreshTokenResponse};
