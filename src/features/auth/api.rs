/// 認証APIモジュール
///
/// 認証リソースへの型付きリクエスト関数。リトライやキャッシュは行わず、
/// エラーはそのまま呼び出し元へ伝播します。
use crate::features::auth::models::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::AppResult;
use log::info;
use std::sync::Arc;

/// 認証APIクライアント
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// 新しいAuthApiを作成する
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// ユーザーを登録する
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/api/auth/register", request).await?;
        info!("ユーザー登録成功: user_id={}", response.user.id);
        Ok(response)
    }

    /// ログインする
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/api/auth/login", request).await?;
        info!("ログイン成功: user_id={}", response.user.id);
        Ok(response)
    }

    /// 現在のユーザープロフィールを取得する
    pub async fn me(&self) -> AppResult<MeResponse> {
        self.client.get("/api/auth/me").await
    }
}
