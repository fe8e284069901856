// src/utils/validation/common.rs

//! 共通バリデーション定数と関数
//!
//! リクエストDTO間で共有するバリデーションルール。制約値はバックエンドの
//! 入力チェックと揃えている。

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// =============================================================================
// バリデーション定数
// =============================================================================

/// 顧客関連の制約
pub mod customer {
    pub const NAME_MIN_LENGTH: u64 = 1;
    pub const NAME_MAX_LENGTH: u64 = 255;
    pub const PHONE_MAX_LENGTH: u64 = 20;
}

/// 住所の制約
pub mod address {
    pub const LINE_MAX_LENGTH: u64 = 255;
    pub const CITY_MAX_LENGTH: u64 = 100;
    pub const STATE_MAX_LENGTH: u64 = 100;
    pub const POSTAL_CODE_MAX_LENGTH: u64 = 20;
    pub const COUNTRY_MAX_LENGTH: u64 = 100;
}

/// 課金関連の制約
pub mod charge {
    /// 最小通貨単位で1以上
    pub const MIN_AMOUNT: i64 = 1;
    pub const TEXT_MAX_LENGTH: u64 = 255;
    pub const METADATA_MAX_LENGTH: u64 = 1000;
}

/// Webhook関連の制約
pub mod webhook {
    pub const URL_MAX_LENGTH: u64 = 2048;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 255;
}

/// 返金関連の制約
pub mod refund {
    pub const REASON_MAX_LENGTH: u64 = 255;
    pub const NOTES_MAX_LENGTH: u64 = 500;
}

// =============================================================================
// バリデーション正規表現
// =============================================================================

pub const SUPPORTED_CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "INR", "JPY"];

pub static CURRENCY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(USD|EUR|GBP|INR|JPY)$").expect("Invalid currency regex"));

// =============================================================================
// カスタムバリデーション関数
// =============================================================================

/// 通貨コードのバリデーション（大文字3文字、対応通貨のみ）
pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if !CURRENCY_REGEX.is_match(currency) {
        let mut error = ValidationError::new("unsupported_currency");
        error.message = Some("Currency must be one of: USD, EUR, GBP, INR, JPY".into());
        return Err(error);
    }
    Ok(())
}

/// 文字列が空白のみでないかをチェック
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

/// Webhook URLはhttp(s)のみ
pub fn validate_webhook_url(url: &str) -> Result<(), ValidationError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        let mut error = ValidationError::new("invalid_scheme");
        error.message = Some("Webhook URL must use http or https".into());
        return Err(error);
    }
    Ok(())
}
