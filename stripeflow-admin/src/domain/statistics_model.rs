// src/domain/statistics_model.rs

//! `/v1/*/statistics` の集計値

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeStatistics {
    pub total_charges: u64,
    pub successful_charges: u64,
    pub failed_charges: u64,
    /// パーセント（0〜100）
    #[serde(default)]
    pub success_rate: f64,
    /// 成功課金の合計（最小通貨単位）
    #[serde(default)]
    pub total_revenue: Option<i64>,
}

impl ChargeStatistics {
    /// 成功・失敗以外（保留中・キャンセル等）
    pub fn other_charges(&self) -> u64 {
        self.total_charges
            .saturating_sub(self.successful_charges + self.failed_charges)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookStatistics {
    pub total_endpoints: u64,
    pub enabled_endpoints: u64,
    pub total_events: u64,
    pub pending_events: u64,
    pub delivered_events: u64,
    pub failed_events: u64,
    #[serde(default)]
    pub delivery_success_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatistics {
    pub total_refunds: u64,
    pub successful_refunds: u64,
    pub failed_refunds: u64,
    #[serde(default)]
    pub success_rate: f64,
}
