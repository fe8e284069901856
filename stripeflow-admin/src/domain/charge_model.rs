// src/domain/charge_model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer_model::CustomerSummary;
use super::payment_status::ChargeStatus;
use crate::types::datetime;

/// 課金（取引）レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: i64,
    /// 金額（最小通貨単位）
    pub amount: i64,
    pub currency: String,
    pub status: ChargeStatus,
    #[serde(default)]
    pub customer: Option<CustomerSummary>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<String>,
    #[serde(default)]
    pub idempotency_key: Option<String>,
    #[serde(with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Charge {
    pub fn customer_label(&self) -> String {
        self.customer
            .as_ref()
            .map_or_else(|| "Guest".to_string(), CustomerSummary::label)
    }
}

/// 課金一覧の絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeFilters {
    pub status: Option<ChargeStatus>,
    pub currency: Option<String>,
    pub customer_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
}

impl ChargeFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
