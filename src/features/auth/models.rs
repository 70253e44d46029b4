use serde::{Deserialize, Serialize};

/// ユーザーデータモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// メールアドレス
    pub email: String,
    /// 表示名
    pub name: Option<String>,
    /// プロフィール画像URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// ログインリクエスト
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// ユーザー登録リクエスト
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// ログイン・登録のレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// ユーザー情報
    pub user: User,
    /// JWTアクセストークン（短命）
    pub access_token: String,
    /// リフレッシュトークン（長命）
    pub refresh_token: String,
}

/// `GET /api/auth/me` のレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
}
