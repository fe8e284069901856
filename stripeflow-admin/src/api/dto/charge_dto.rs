// src/api/dto/charge_dto.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::common::{self, charge};

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    /// 金額（最小通貨単位）
    #[validate(range(min = charge::MIN_AMOUNT, message = "Amount must be at least 1 minor unit"))]
    pub amount: i64,

    #[validate(custom(function = common::validate_currency))]
    pub currency: String,

    pub customer_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = charge::TEXT_MAX_LENGTH,
        message = "Payment method must not exceed 255 characters"
    ))]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = charge::TEXT_MAX_LENGTH,
        message = "Description must not exceed 255 characters"
    ))]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = charge::METADATA_MAX_LENGTH,
        message = "Metadata must not exceed 1000 characters"
    ))]
    pub metadata: Option<String>,

    /// 二重送信防止キー（未指定ならサービス層でUUIDを採番）
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = charge::TEXT_MAX_LENGTH,
        message = "Idempotency key must not exceed 255 characters"
    ))]
    pub idempotency_key: Option<String>,
}

impl CreateChargeRequest {
    pub fn new(amount: i64, currency: impl Into<String>, customer_id: i64) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer_id,
            payment_method: None,
            description: None,
            metadata: None,
            idempotency_key: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
