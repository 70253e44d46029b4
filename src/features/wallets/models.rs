use crate::shared::errors::AppResult;
use crate::shared::utils::validate_date;
use serde::{Deserialize, Serialize};

/// ウォレットの種別
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    /// 個人ウォレット
    Personal,
    /// グループウォレット
    Group,
}

/// ウォレットデータモデル
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// ウォレットメンバー
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WalletMember {
    pub id: String,
    pub wallet_id: String,
    pub user_id: String,
    /// owner または member
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 取引データモデル
///
/// OCRジョブから作成された取引は、元画像URL・OCR生テキスト・信頼度の
/// 由来フィールドを持ちます。金額は符号付きで、通貨は暗黙です。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transaction {
    pub id: String,
    pub wallet_id: String,
    pub amount: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    /// 取引日（YYYY-MM-DD形式）
    pub date: String,
    pub created_by: String,
    #[serde(default)]
    pub original_image_url: Option<String>,
    #[serde(default)]
    pub ocr_raw_text: Option<String>,
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
    pub is_auto_categorized: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// ウォレット作成用DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<WalletType>,
}

/// ウォレット更新用DTO（部分更新）
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWalletRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<WalletType>,
}

/// 取引作成用DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub wallet_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub date: String,
}

/// 取引更新用DTO（部分更新）
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl CreateTransactionRequest {
    /// フォーム層での事前バリデーション
    ///
    /// APIモジュール自体は検証を行いません。送信前にフォーム側で
    /// 呼び出すためのヘルパーです。
    pub fn validate(&self) -> AppResult<()> {
        validate_date(&self.date)?;
        if self.amount == 0.0 {
            return Err(crate::shared::errors::AppError::validation(
                "金額には0以外の値を入力してください",
            ));
        }
        Ok(())
    }
}
