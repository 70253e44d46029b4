/// 認証機能のモジュール
pub mod api;
pub mod models;
pub mod session;

pub use api::AuthApi;
pub use models::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, User};
pub use session::Session;
