// src/domain/webhook_model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payment_status::WebhookEventStatus;
use crate::types::datetime;

/// 通知先として登録されたURL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEndpoint {
    pub id: i64,
    pub url: String,
    pub enabled: bool,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub updated_at: DateTime<Utc>,
}

impl WebhookEndpoint {
    pub fn state_label(&self) -> &'static str {
        if self.enabled {
            "ENABLED"
        } else {
            "DISABLED"
        }
    }
}

/// 1件の配信記録（リトライ情報付き）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    pub id: i64,
    pub endpoint_id: i64,
    pub event_type: String,
    #[serde(default)]
    pub event_data: Option<String>,
    pub status: WebhookEventStatus,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default, with = "datetime::optional")]
    pub last_attempt: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime::optional")]
    pub next_retry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_code: Option<u16>,
    #[serde(default)]
    pub response_body: Option<String>,
    #[serde(with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub updated_at: DateTime<Utc>,
}

impl WebhookEvent {
    /// 「2/5」形式のリトライ表示
    pub fn retry_label(&self) -> String {
        format!("{}/{}", self.retry_count, self.max_retries)
    }

    pub fn retries_exhausted(&self) -> bool {
        self.max_retries > 0 && self.retry_count >= self.max_retries
    }
}
