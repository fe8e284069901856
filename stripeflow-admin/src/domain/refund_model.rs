// src/domain/refund_model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payment_status::RefundStatus;
use crate::types::datetime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: i64,
    pub charge_id: i64,
    /// 返金額（最小通貨単位）
    pub amount: i64,
    pub status: RefundStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub updated_at: DateTime<Utc>,
}
