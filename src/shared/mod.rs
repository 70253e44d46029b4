/// 共有モジュール
///
/// 機能モジュール間で共有されるコード（APIクライアント、設定、エラー型、
/// トークンストレージ、バリデーションユーティリティ）を提供します。
pub mod api_client;
pub mod config;
pub mod errors;
pub mod token_storage;
pub mod utils;
