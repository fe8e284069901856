// src/api/dto/webhook_dto.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::WebhookEndpoint;
use crate::utils::validation::common::{self, webhook};

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookEndpointRequest {
    #[validate(
        url(message = "URL must be a valid URL"),
        length(max = webhook::URL_MAX_LENGTH, message = "URL must not exceed 2048 characters"),
        custom(function = common::validate_webhook_url)
    )]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = webhook::DESCRIPTION_MAX_LENGTH,
        message = "Description must not exceed 255 characters"
    ))]
    pub description: Option<String>,
}

impl CreateWebhookEndpointRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: None,
            enabled: Some(true),
            description: None,
        }
    }
}

// 編集フォームの初期値（シークレットは再送しない）
impl From<&WebhookEndpoint> for CreateWebhookEndpointRequest {
    fn from(endpoint: &WebhookEndpoint) -> Self {
        Self {
            url: endpoint.url.clone(),
            secret: None,
            enabled: Some(endpoint.enabled),
            description: endpoint.description.clone(),
        }
    }
}
