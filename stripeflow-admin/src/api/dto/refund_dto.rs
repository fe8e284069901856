// src/api/dto/refund_dto.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::common::{charge, refund};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundRequest {
    pub charge_id: i64,

    /// 返金額（最小通貨単位）
    #[validate(range(min = charge::MIN_AMOUNT, message = "Amount must be at least 1 minor unit"))]
    pub amount: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = refund::REASON_MAX_LENGTH,
        message = "Reason must not exceed 255 characters"
    ))]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = refund::NOTES_MAX_LENGTH,
        message = "Notes must not exceed 500 characters"
    ))]
    pub notes: Option<String>,
}
