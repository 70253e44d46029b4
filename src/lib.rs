//! ウォレット・レシートOCRバックエンド用のAPIクライアントライブラリ
//!
//! APIサーバーに対する認証付きHTTPクライアント（アクセストークンの自動付与と
//! 401時の1回限りのトークンリフレッシュ再送）、認証セッション状態、
//! ウォレット・取引・OCR・プロフィールの型付きAPIモジュール、
//! レシートアップロードフローとルート解決を提供します。
//!
//! # 使用例
//!
//! ```no_run
//! use saifu_client::features::auth::Session;
//! use saifu_client::features::ocr::{OcrApi, UploadFlow};
//! use saifu_client::shared::api_client::ApiClient;
//! use saifu_client::shared::token_storage::TokenStorage;
//! use std::sync::Arc;
//!
//! # async fn run() -> saifu_client::shared::errors::AppResult<()> {
//! let tokens = TokenStorage::new()?;
//! let client = Arc::new(ApiClient::new(tokens)?);
//!
//! let session = Session::new(Arc::clone(&client));
//! session.check_session().await;
//!
//! if !session.is_authenticated() {
//!     session.login("taro@example.com", "password").await?;
//! }
//!
//! let ocr = OcrApi::new(Arc::clone(&client));
//! let mut flow = UploadFlow::new();
//! flow.select_file(std::path::Path::new("receipt.jpg"))?;
//! flow.submit(&ocr).await;
//! # Ok(())
//! # }
//! ```
pub mod features;
pub mod shared;

pub use features::auth::Session;
pub use features::navigation::{resolve_route, Page};
pub use features::ocr::{OcrApi, ReceiptView, UploadFlow, UploadState};
pub use features::profile::ProfileApi;
pub use features::wallets::WalletApi;
pub use shared::api_client::{ApiClient, ApiClientConfig};
pub use shared::config::environment::{initialize_logging_system, load_environment_variables};
pub use shared::errors::{AppError, AppResult};
pub use shared::token_storage::TokenStorage;
