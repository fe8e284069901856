// src/service/webhook_service.rs

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::CreateWebhookEndpointRequest;
use crate::api::ApiClient;
use crate::domain::{WebhookEndpoint, WebhookEvent, WebhookEventStatus, WebhookStatistics};
use crate::error::AppResult;
use crate::types::{path_segment, Page, PageRequest, QueryParams};

const BASE_PATH: &str = "/v1/webhooks";

#[derive(Clone)]
pub struct WebhookService {
    client: Arc<ApiClient>,
}

impl WebhookService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // --- エンドポイント ---

    pub async fn list_endpoints(&self, page: PageRequest) -> AppResult<Page<WebhookEndpoint>> {
        self.client
            .get_paginated(&format!("{}/endpoints", BASE_PATH), page, &QueryParams::new())
            .await
    }

    pub async fn get_endpoint(&self, id: i64) -> AppResult<WebhookEndpoint> {
        self.client
            .get(&format!("{}/endpoints/{}", BASE_PATH, id), &QueryParams::new())
            .await
    }

    pub async fn create_endpoint(
        &self,
        request: &CreateWebhookEndpointRequest,
    ) -> AppResult<WebhookEndpoint> {
        request.validate()?;
        let endpoint: WebhookEndpoint = self
            .client
            .post(&format!("{}/endpoints", BASE_PATH), request)
            .await?;
        tracing::info!(endpoint_id = endpoint.id, url = %endpoint.url, "Webhook endpoint created");
        Ok(endpoint)
    }

    pub async fn update_endpoint(
        &self,
        id: i64,
        request: &CreateWebhookEndpointRequest,
    ) -> AppResult<WebhookEndpoint> {
        request.validate()?;
        self.client
            .put(&format!("{}/endpoints/{}", BASE_PATH, id), request)
            .await
    }

    pub async fn delete_endpoint(&self, id: i64) -> AppResult<()> {
        self.client
            .delete::<()>(&format!("{}/endpoints/{}", BASE_PATH, id))
            .await?;
        tracing::info!(endpoint_id = id, "Webhook endpoint deleted");
        Ok(())
    }

    /// 有効/無効の切り替え
    pub async fn toggle_endpoint(&self, id: i64, enabled: bool) -> AppResult<WebhookEndpoint> {
        let params = QueryParams::new().set("enabled", enabled);
        let endpoint: WebhookEndpoint = self
            .client
            .put_empty(&format!("{}/endpoints/{}/toggle", BASE_PATH, id), &params)
            .await?;
        tracing::info!(endpoint_id = id, enabled = endpoint.enabled, "Webhook endpoint toggled");
        Ok(endpoint)
    }

    // --- イベント ---

    pub async fn list_events_by_endpoint(
        &self,
        endpoint_id: i64,
        page: PageRequest,
    ) -> AppResult<Page<WebhookEvent>> {
        self.client
            .get_paginated(
                &format!("{}/endpoints/{}/events", BASE_PATH, endpoint_id),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_events_by_status(
        &self,
        status: &WebhookEventStatus,
        page: PageRequest,
    ) -> AppResult<Page<WebhookEvent>> {
        self.client
            .get_paginated(
                &format!("{}/events/status/{}", BASE_PATH, path_segment(status.as_str())),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_recent_events(&self, page: PageRequest) -> AppResult<Page<WebhookEvent>> {
        self.client
            .get_paginated(&format!("{}/events/recent", BASE_PATH), page, &QueryParams::new())
            .await
    }

    pub async fn list_failed_events(&self, page: PageRequest) -> AppResult<Page<WebhookEvent>> {
        self.client
            .get_paginated(&format!("{}/events/failed", BASE_PATH), page, &QueryParams::new())
            .await
    }

    /// 配信の再試行を要求（再試行自体はサーバー側で行う）
    pub async fn retry_event(&self, event_id: i64) -> AppResult<WebhookEvent> {
        let event: WebhookEvent = self
            .client
            .put_empty(&format!("{}/events/{}/retry", BASE_PATH, event_id), &QueryParams::new())
            .await?;
        tracing::info!(event_id, status = %event.status, "Webhook event retry requested");
        Ok(event)
    }

    pub async fn statistics(&self) -> AppResult<WebhookStatistics> {
        self.client
            .get(&format!("{}/statistics", BASE_PATH), &QueryParams::new())
            .await
    }
}
