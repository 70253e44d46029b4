// プロフィール機能モジュール

pub mod api;
pub mod models;

pub use api::ProfileApi;
pub use models::ProfilePictureResponse;
