/// OCR APIモジュール
///
/// 同期的な単発OCRエンドポイント（`/api/process-file`）と、
/// ジョブ指向のOCRエンドポイント（`/api/ocr/jobs`）への型付きリクエスト関数。
/// アップロードフローが使用するのは前者のみです。
use crate::features::ocr::models::{OcrJob, OcrResult};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::guess_content_type;
use log::info;
use reqwest::multipart;
use std::sync::Arc;

/// OCR APIクライアント
#[derive(Clone)]
pub struct OcrApi {
    client: Arc<ApiClient>,
}

impl OcrApi {
    /// 新しいOcrApiを作成する
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// ファイルを単発OCRエンドポイントで処理する
    ///
    /// マルチパートのフィールド名は`file`。ポーリングは行わず、
    /// 処理結果が1回のレスポンスで返ります。
    pub async fn process_file(&self, file_data: &[u8], filename: &str) -> AppResult<OcrResult> {
        info!("OCR処理リクエスト送信: filename={filename}");

        let content_type = guess_content_type(filename);
        let result: OcrResult = self
            .client
            .post_multipart("/api/process-file", || {
                let part = multipart::Part::bytes(file_data.to_vec())
                    .file_name(filename.to_string())
                    .mime_str(content_type)
                    .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;
                Ok(multipart::Form::new().part("file", part))
            })
            .await?;

        info!("OCR処理完了: filename={filename}, success={}", result.success);
        Ok(result)
    }

    /// OCRジョブを作成する（マルチパートのフィールド名は`image`）
    pub async fn create_job(&self, image_data: &[u8], filename: &str) -> AppResult<OcrJob> {
        info!("OCRジョブ作成リクエスト送信: filename={filename}");

        let content_type = guess_content_type(filename);
        let job: OcrJob = self
            .client
            .post_multipart("/api/ocr/jobs", || {
                let part = multipart::Part::bytes(image_data.to_vec())
                    .file_name(filename.to_string())
                    .mime_str(content_type)
                    .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;
                Ok(multipart::Form::new().part("image", part))
            })
            .await?;

        info!("OCRジョブ作成成功: job_id={}", job.id);
        Ok(job)
    }

    /// OCRジョブのステータスと結果を取得する
    pub async fn get_job(&self, id: &str) -> AppResult<OcrJob> {
        self.client.get(&format!("/api/ocr/jobs/{id}")).await
    }

    /// 現在のユーザーのOCRジョブ一覧を取得する
    pub async fn get_jobs(&self) -> AppResult<Vec<OcrJob>> {
        self.client.get("/api/ocr/jobs").await
    }

    /// OCRジョブを削除する
    pub async fn delete_job(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("/api/ocr/jobs/{id}")).await
    }
}
