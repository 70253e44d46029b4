/// OCR機能モジュール
///
/// このモジュールはレシートOCRに関連する機能を提供します：
/// - 単発OCRエンドポイントとジョブ指向エンドポイントへの型付きAPI
/// - ファイル選択からプレビュー・送信・結果表示までのアップロードフロー
/// - OCR結果の表示用整形
pub mod api;
pub mod display;
pub mod models;
pub mod upload;

pub use api::OcrApi;
pub use display::{format_amount, format_item, ReceiptView};
pub use models::{JobStatus, OcrJob, OcrResult, ParsedReceipt, ReceiptData, ReceiptItem};
pub use upload::{FilePreview, UploadFlow, UploadState};
