use serde::{Deserialize, Serialize};

/// プロフィール画像アップロードのレスポンス
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfilePictureResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
