// src/pages/webhooks.rs

use crate::api::dto::CreateWebhookEndpointRequest;
use crate::domain::{WebhookEndpoint, WebhookEvent, WebhookEventStatus};
use crate::error::AppResult;
use crate::types::{path_segment, Page, PageRequest, QueryParams};
use crate::ui::format::truncate;
use crate::ui::{Column, DataTable, FormState, StatusBadge};

use super::{section, table_for, Loadable, PageContext};

const WEBHOOKS_PATH: &str = "/v1/webhooks";

/// イベント一覧の取得元
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    Recent,
    Failed,
    Status(WebhookEventStatus),
    Endpoint(i64),
}

impl EventFilter {
    pub fn path(&self) -> String {
        match self {
            Self::Recent => format!("{}/events/recent", WEBHOOKS_PATH),
            Self::Failed => format!("{}/events/failed", WEBHOOKS_PATH),
            Self::Status(status) => format!(
                "{}/events/status/{}",
                WEBHOOKS_PATH,
                path_segment(status.as_str())
            ),
            Self::Endpoint(id) => format!("{}/endpoints/{}/events", WEBHOOKS_PATH, id),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Recent => "Recent Events".to_string(),
            Self::Failed => "Failed Events".to_string(),
            Self::Status(status) => format!("{} Events", status.display_name()),
            Self::Endpoint(id) => format!("Events for Endpoint #{}", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebhooksView {
    pub filter: EventFilter,
    pub endpoints: Loadable<Page<WebhookEndpoint>>,
    pub events: Loadable<Page<WebhookEvent>>,
}

impl WebhooksView {
    pub fn endpoints_table(&self) -> DataTable<WebhookEndpoint> {
        let table = DataTable::new(endpoint_columns())
            .with_empty_message("No webhook endpoints configured");
        table_for(table, &self.endpoints)
    }

    pub fn events_table(&self) -> DataTable<WebhookEvent> {
        let table = DataTable::new(event_columns()).with_empty_message("No webhook events");
        table_for(table, &self.events)
    }

    pub fn render(&self) -> String {
        [
            section("Webhook Endpoints", &self.endpoints_table().render_text()),
            section(&self.filter.title(), &self.events_table().render_text()),
        ]
        .join("\n\n")
    }
}

pub fn endpoint_columns() -> Vec<Column<WebhookEndpoint>> {
    vec![
        Column::text("id", "ID"),
        Column::custom("url", "URL", |value, _: &WebhookEndpoint| {
            truncate(value.as_str().unwrap_or("-"), 48)
        }),
        Column::custom("enabled", "State", |_, endpoint: &WebhookEndpoint| {
            StatusBadge::new(endpoint.state_label()).render()
        }),
        Column::text("description", "Description"),
        Column::date_time("createdAt", "Created"),
    ]
}

pub fn event_columns() -> Vec<Column<WebhookEvent>> {
    vec![
        Column::text("id", "ID"),
        Column::text("endpointId", "Endpoint"),
        Column::text("eventType", "Type"),
        Column::status("status", "Status"),
        Column::custom("retryCount", "Retries", |_, event: &WebhookEvent| {
            event.retry_label()
        }),
        Column::text("responseCode", "Response"),
        Column::date_time("lastAttempt", "Last Attempt"),
    ]
}

pub struct WebhooksPage {
    context: PageContext,
}

impl WebhooksPage {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    /// エンドポイント一覧とイベント一覧を並行して取得
    pub async fn load(&self, page: PageRequest, filter: EventFilter) -> WebhooksView {
        let webhooks = &self.context.services.webhooks;
        let params = QueryParams::with_page(page);

        let events = async {
            match &filter {
                EventFilter::Recent => {
                    self.context
                        .cached(&filter.path(), &params, || webhooks.list_recent_events(page))
                        .await
                }
                EventFilter::Failed => {
                    self.context
                        .cached(&filter.path(), &params, || webhooks.list_failed_events(page))
                        .await
                }
                EventFilter::Status(status) => {
                    self.context
                        .cached(&filter.path(), &params, || {
                            webhooks.list_events_by_status(status, page)
                        })
                        .await
                }
                EventFilter::Endpoint(id) => {
                    self.context
                        .cached(&filter.path(), &params, || {
                            webhooks.list_events_by_endpoint(*id, page)
                        })
                        .await
                }
            }
        };
        let endpoints_path = format!("{}/endpoints", WEBHOOKS_PATH);
        let endpoints = self
            .context
            .cached(&endpoints_path, &params, || webhooks.list_endpoints(page));

        let (endpoints, events) = tokio::join!(endpoints, events);

        WebhooksView {
            filter: filter.clone(),
            endpoints: endpoints.into(),
            events: events.into(),
        }
    }

    pub async fn create_endpoint(
        &self,
        form: &mut FormState,
        request: &CreateWebhookEndpointRequest,
    ) -> Option<WebhookEndpoint> {
        form.begin_submit();
        let result = self.context.services.webhooks.create_endpoint(request).await;
        let endpoint = form.finish(result)?;

        self.context.cache.invalidate(WEBHOOKS_PATH).await;
        self.context
            .notify_success(format!("Webhook endpoint #{} created", endpoint.id));
        Some(endpoint)
    }

    pub async fn delete_endpoint(&self, id: i64) -> AppResult<()> {
        self.context.services.webhooks.delete_endpoint(id).await?;
        self.context.cache.invalidate(WEBHOOKS_PATH).await;
        self.context
            .notify_success(format!("Webhook endpoint #{} deleted", id));
        Ok(())
    }

    pub async fn toggle_endpoint(&self, id: i64, enabled: bool) -> AppResult<WebhookEndpoint> {
        let endpoint = self
            .context
            .services
            .webhooks
            .toggle_endpoint(id, enabled)
            .await?;
        self.context.cache.invalidate(WEBHOOKS_PATH).await;
        self.context.notify_success(format!(
            "Webhook endpoint #{} {}",
            id,
            if endpoint.enabled { "enabled" } else { "disabled" }
        ));
        Ok(endpoint)
    }

    pub async fn retry_event(&self, event_id: i64) -> AppResult<WebhookEvent> {
        let event = self.context.services.webhooks.retry_event(event_id).await?;
        self.context.cache.invalidate(WEBHOOKS_PATH).await;
        self.context
            .notify_success(format!("Retry scheduled for event #{}", event_id));
        Ok(event)
    }
}
