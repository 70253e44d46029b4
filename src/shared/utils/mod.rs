use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// メールアドレスの簡易パターン（フォーム層での事前チェック用）
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("メールアドレス正規表現が不正"));

/// 必須項目のバリデーション
///
/// # 引数
/// * `value` - 入力値
/// * `field_name` - エラーメッセージに使用する項目名
pub fn validate_required(value: &str, field_name: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "{field_name}を入力してください"
        )));
    }
    Ok(())
}

/// メールアドレスのバリデーション
///
/// ネットワーク呼び出しの前にフォーム層で実行されます。
/// 厳密なRFC準拠ではなく、明らかな入力ミスを弾くための形式チェックです。
pub fn validate_email(email: &str) -> AppResult<()> {
    validate_required(email, "メールアドレス")?;

    if !EMAIL_PATTERN.is_match(email.trim()) {
        return Err(AppError::validation(
            "メールアドレスの形式が正しくありません",
        ));
    }
    Ok(())
}

/// 日付文字列のバリデーション
///
/// # バリデーション規則
/// - YYYY-MM-DD形式であること
/// - 実在する日付であること
/// - 1900年以降、2100年以前であること
pub fn validate_date(date_str: &str) -> AppResult<()> {
    // 基本的な形式チェック
    if date_str.len() != 10 {
        return Err(AppError::validation(
            "日付はYYYY-MM-DD形式で入力してください",
        ));
    }

    // ハイフンの位置チェック
    if (date_str.chars().nth(4) != Some('-')) || (date_str.chars().nth(7) != Some('-')) {
        return Err(AppError::validation(
            "日付はYYYY-MM-DD形式で入力してください",
        ));
    }

    // 実在する日付かチェック
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::validation("実在する日付を入力してください"))?;

    // 範囲チェック
    let year = chrono::Datelike::year(&date);
    if !(1900..=2100).contains(&year) {
        return Err(AppError::validation(
            "日付は1900年から2100年の間で入力してください",
        ));
    }

    Ok(())
}

/// ファイル名からContent-Typeを取得
pub fn guess_content_type(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
