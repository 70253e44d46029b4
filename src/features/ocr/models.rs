use serde::{Deserialize, Serialize};

/// OCR処理結果（`POST /api/process-file` のレスポンス）
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OcrResult {
    /// 処理の成否
    pub success: bool,
    /// 抽出された生テキスト
    #[serde(default)]
    pub ocr_text: String,
    /// 構造化されたレシートデータ
    #[serde(default)]
    pub parsed_data: Option<ParsedReceipt>,
    /// 失敗時のエラーメッセージ
    #[serde(default)]
    pub error: Option<String>,
}

/// 解析済みレシート
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ParsedReceipt {
    pub data: ReceiptData,
}

/// レシートの構造化データ
///
/// OCRエンジンが項目を特定できない場合があるため、すべて省略可能です。
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ReceiptData {
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ReceiptItem>>,
    #[serde(default)]
    pub raw_text: Option<String>,
}

/// レシートの明細行
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    pub price: f64,
}

/// OCRジョブのステータス
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Done,
    Error,
}

/// OCRジョブデータモデル
///
/// ジョブ指向の非同期OCRパス用。アップロードフローは同期的な
/// `/api/process-file` を使用するため、このモデルはAPI層にのみ現れます。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OcrJob {
    pub id: String,
    pub user_id: String,
    pub image_path: String,
    pub status: JobStatus,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub extracted_data: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
