/// プロフィールAPIモジュール
use crate::features::profile::models::ProfilePictureResponse;
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::guess_content_type;
use log::info;
use reqwest::multipart;
use std::sync::Arc;

/// プロフィールAPIクライアント
#[derive(Clone)]
pub struct ProfileApi {
    client: Arc<ApiClient>,
}

impl ProfileApi {
    /// 新しいProfileApiを作成する
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// プロフィール画像をアップロードする
    ///
    /// マルチパートのフィールド名は`profile_image`。
    pub async fn upload_profile_picture(
        &self,
        image_data: &[u8],
        filename: &str,
    ) -> AppResult<ProfilePictureResponse> {
        info!("プロフィール画像アップロード開始: filename={filename}");

        let content_type = guess_content_type(filename);
        let response: ProfilePictureResponse = self
            .client
            .post_multipart("/api/users/profile-picture", || {
                let part = multipart::Part::bytes(image_data.to_vec())
                    .file_name(filename.to_string())
                    .mime_str(content_type)
                    .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;
                Ok(multipart::Form::new().part("profile_image", part))
            })
            .await?;

        info!(
            "プロフィール画像アップロード完了: success={}, image_url={:?}",
            response.success, response.image_url
        );
        Ok(response)
    }
}
