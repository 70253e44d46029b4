/// レシート表示モジュール
///
/// OCR結果を表示用の文字列へ整形します。金額は小数点以下2桁＋通貨サフィックス、
/// 未検出の項目はプレースホルダで表示します。
use crate::features::ocr::models::{OcrResult, ReceiptItem};

/// 店名・日付が未検出の場合のプレースホルダ
const MISSING_FIELD: &str = "—";
/// 合計金額が未検出の場合のプレースホルダ
const MISSING_AMOUNT: &str = "Not found";

/// 金額を表示用に整形する（例: `12.50 USD`）
///
/// 通貨が不明な場合はサフィックスなし、金額が不明な場合はプレースホルダを返します。
pub fn format_amount(amount: Option<f64>, currency: Option<&str>) -> String {
    match amount {
        Some(value) => match currency {
            Some(currency) if !currency.is_empty() => format!("{value:.2} {currency}"),
            _ => format!("{value:.2}"),
        },
        None => MISSING_AMOUNT.to_string(),
    }
}

/// 明細行を表示用に整形する（例: `Widget - 5.00 USD`）
pub fn format_item(item: &ReceiptItem, currency: Option<&str>) -> String {
    match currency {
        Some(currency) if !currency.is_empty() => {
            format!("{} - {:.2} {currency}", item.name, item.price)
        }
        _ => format!("{} - {:.2}", item.name, item.price),
    }
}

/// 表示用に整形済みのレシートビュー
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptView {
    /// 店名
    pub merchant: String,
    /// 合計金額（整形済み）
    pub amount: String,
    /// 日付
    pub date: String,
    /// 明細行（整形済み）
    pub items: Vec<String>,
    /// OCRの生テキスト（そのまま）
    pub raw_text: String,
}

impl ReceiptView {
    /// OCR結果から表示用ビューを作成する
    pub fn from_result(result: &OcrResult) -> Self {
        let data = result
            .parsed_data
            .as_ref()
            .map(|parsed| &parsed.data);

        let merchant = data
            .and_then(|d| d.merchant.clone())
            .unwrap_or_else(|| MISSING_FIELD.to_string());
        let date = data
            .and_then(|d| d.date.clone())
            .unwrap_or_else(|| MISSING_FIELD.to_string());

        let currency = data.and_then(|d| d.currency.as_deref());
        let amount = format_amount(data.and_then(|d| d.total_amount), currency);

        let items = data
            .and_then(|d| d.items.as_ref())
            .map(|items| {
                items
                    .iter()
                    .map(|item| format_item(item, currency))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            merchant,
            amount,
            date,
            items,
            raw_text: result.ocr_text.clone(),
        }
    }

    /// テキスト形式のサマリを生成する
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Merchant: {}", self.merchant),
            format!("Amount: {}", self.amount),
            format!("Date: {}", self.date),
        ];

        if !self.items.is_empty() {
            lines.push("Items:".to_string());
            for item in &self.items {
                lines.push(format!("  {item}"));
            }
        }

        lines.push("Raw OCR Text:".to_string());
        lines.push(self.raw_text.clone());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ocr::models::OcrResult;
    use quickcheck_macros::quickcheck;

    fn sample_result() -> OcrResult {
        serde_json::from_str(
            r#"{
                "success": true,
                "ocr_text": "Acme Store\nWidget 5.00\nTotal 12.50",
                "parsed_data": {
                    "data": {
                        "merchant": "Acme",
                        "total_amount": 12.5,
                        "currency": "USD",
                        "date": "2024-01-01",
                        "items": [{"name": "Widget", "price": 5}]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_receipt_view_from_success_result() {
        let view = ReceiptView::from_result(&sample_result());

        assert_eq!(view.merchant, "Acme");
        assert_eq!(view.amount, "12.50 USD");
        assert_eq!(view.date, "2024-01-01");
        assert_eq!(view.items, vec!["Widget - 5.00 USD".to_string()]);
        assert_eq!(view.raw_text, "Acme Store\nWidget 5.00\nTotal 12.50");
    }

    #[test]
    fn test_receipt_view_with_missing_fields() {
        let result: OcrResult = serde_json::from_str(
            r#"{
                "success": true,
                "ocr_text": "かすれて読めないレシート",
                "parsed_data": {"data": {}}
            }"#,
        )
        .unwrap();

        let view = ReceiptView::from_result(&result);
        assert_eq!(view.merchant, "—");
        assert_eq!(view.amount, "Not found");
        assert_eq!(view.date, "—");
        assert!(view.items.is_empty());
        assert_eq!(view.raw_text, "かすれて読めないレシート");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(12.5), Some("USD")), "12.50 USD");
        assert_eq!(format_amount(Some(1250.0), Some("JPY")), "1250.00 JPY");
        assert_eq!(format_amount(Some(3.0), None), "3.00");
        assert_eq!(format_amount(Some(3.0), Some("")), "3.00");
        assert_eq!(format_amount(None, Some("USD")), "Not found");
    }

    #[test]
    fn test_to_text_contains_all_sections() {
        let view = ReceiptView::from_result(&sample_result());
        let text = view.to_text();

        assert!(text.contains("Merchant: Acme"));
        assert!(text.contains("Amount: 12.50 USD"));
        assert!(text.contains("Date: 2024-01-01"));
        assert!(text.contains("Widget - 5.00 USD"));
        assert!(text.contains("Raw OCR Text:"));
    }

    #[quickcheck]
    fn prop_format_amount_always_two_decimals(cents: i64) -> bool {
        // 任意の金額が常に小数点以下2桁で整形される
        let amount = (cents % 1_000_000) as f64 / 100.0;
        let formatted = format_amount(Some(amount), Some("USD"));

        let Some(number) = formatted.strip_suffix(" USD") else {
            return false;
        };
        match number.rsplit_once('.') {
            Some((_, decimals)) => decimals.len() == 2,
            None => false,
        }
    }
}
