/// レシートアップロードフロー
///
/// アップロード1件ごとの状態遷移:
/// `Idle → Previewing → Processing → {Displaying | Errored}`
///
/// ファイル選択時にネットワーク呼び出しなしでプレビューを確保し、
/// 送信は単発OCRエンドポイントへの1回のリクエストで完結します。
/// 失敗時はエラーメッセージを記録し、プレビューは残します。
use crate::features::ocr::api::OcrApi;
use crate::features::ocr::models::OcrResult;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::guess_content_type;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// アップロードフローの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    /// 初期状態
    Idle,
    /// ファイル選択済み・プレビュー表示中
    Previewing,
    /// OCR処理中
    Processing,
    /// 結果表示中
    Displaying,
    /// エラー表示中（プレビューは保持）
    Errored,
}

/// 選択されたファイルのプレビュー情報
#[derive(Debug, Clone)]
pub struct FilePreview {
    /// 選択元のパス（バイト列から直接選択した場合はNone）
    pub path: Option<PathBuf>,
    /// ファイル名
    pub filename: String,
    /// ファイル内容
    pub data: Vec<u8>,
}

/// レシートアップロードフロー
pub struct UploadFlow {
    state: UploadState,
    preview: Option<FilePreview>,
    result: Option<OcrResult>,
    error: Option<String>,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    /// 新しいアップロードフローを作成する
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            preview: None,
            result: None,
            error: None,
        }
    }

    /// 現在の状態を取得
    pub fn state(&self) -> UploadState {
        self.state
    }

    /// プレビューを取得（選択済みの場合のみSome）
    pub fn preview(&self) -> Option<&FilePreview> {
        self.preview.as_ref()
    }

    /// OCR結果を取得（表示中の場合のみSome）
    pub fn result(&self) -> Option<&OcrResult> {
        self.result.as_ref()
    }

    /// エラーメッセージを取得（エラー状態の場合のみSome）
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// ファイルを選択する
    ///
    /// ファイル内容を読み込んでプレビューを確保します。ネットワーク呼び出しは
    /// 行いません。対応していない形式はフォーム層の事前チェックとして弾きます。
    pub fn select_file(&mut self, path: &Path) -> AppResult<()> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::validation("ファイル名を取得できませんでした"))?
            .to_string();

        let data = std::fs::read(path)?;
        self.select_bytes(data, &filename)?;

        if let Some(preview) = self.preview.as_mut() {
            preview.path = Some(path.to_path_buf());
        }
        Ok(())
    }

    /// バイト列からファイルを選択する
    pub fn select_bytes(&mut self, data: Vec<u8>, filename: &str) -> AppResult<()> {
        if guess_content_type(filename) == "application/octet-stream" {
            return Err(AppError::validation(
                "対応していないファイル形式です（画像またはPDFを選択してください）",
            ));
        }

        if data.is_empty() {
            return Err(AppError::validation("ファイルが空です"));
        }

        info!(
            "ファイルを選択しました: filename={filename}, size={}bytes",
            data.len()
        );

        self.preview = Some(FilePreview {
            path: None,
            filename: filename.to_string(),
            data,
        });
        self.result = None;
        self.error = None;
        self.state = UploadState::Previewing;
        Ok(())
    }

    /// 選択済みファイルをOCRエンドポイントへ送信する
    ///
    /// 成功時は結果を保持して表示状態へ、失敗時はエラーメッセージを記録して
    /// エラー状態へ遷移します（どちらの場合もプレビューは保持）。
    /// エラーはこのコンポーネントがユーザー向けメッセージへ変換するため、
    /// 呼び出し元へは伝播しません。
    pub async fn submit(&mut self, api: &OcrApi) {
        let Some(preview) = self.preview.as_ref() else {
            warn!("ファイル未選択のまま送信が呼ばれました");
            self.error = Some("ファイルを選択してください".to_string());
            self.state = UploadState::Errored;
            return;
        };

        self.state = UploadState::Processing;
        self.error = None;

        match api.process_file(&preview.data, &preview.filename).await {
            Ok(result) if result.success => {
                self.result = Some(result);
                self.state = UploadState::Displaying;
            }
            Ok(result) => {
                let message = result
                    .error
                    .unwrap_or_else(|| "OCR処理に失敗しました".to_string());
                warn!("OCR処理が失敗を返しました: {message}");
                self.error = Some(message);
                self.state = UploadState::Errored;
            }
            Err(e) => {
                warn!("OCRリクエストに失敗しました: {}", e.details());
                self.error = Some(e.user_message().to_string());
                self.state = UploadState::Errored;
            }
        }
    }

    /// フローを初期状態に戻す
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
        self.preview = None;
        self.result = None;
        self.error = None;
    }
}
