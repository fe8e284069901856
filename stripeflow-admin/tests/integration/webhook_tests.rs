// tests/integration/webhook_tests.rs

use stripeflow_admin::api::dto::CreateWebhookEndpointRequest;
use stripeflow_admin::domain::WebhookEventStatus;
use stripeflow_admin::error::ErrorKind;
use stripeflow_admin::types::PageRequest;

use crate::common::app_helper::setup_app;

#[tokio::test]
async fn test_endpoint_lifecycle() {
    let app = setup_app().await;
    let webhooks = app.services().webhooks;

    let mut request = CreateWebhookEndpointRequest::new("https://hooks.example.com/stripeflow");
    request.description = Some("Billing".to_string());
    let endpoint = webhooks.create_endpoint(&request).await.unwrap();
    assert!(endpoint.enabled);
    assert_eq!(endpoint.state_label(), "ENABLED");

    let toggled = webhooks.toggle_endpoint(endpoint.id, false).await.unwrap();
    assert!(!toggled.enabled);
    let recorded = app.server.last_request().unwrap();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.query.as_deref(), Some("enabled=false"));

    request.description = Some("Billing v2".to_string());
    let updated = webhooks.update_endpoint(endpoint.id, &request).await.unwrap();
    assert_eq!(updated.description.as_deref(), Some("Billing v2"));

    webhooks.delete_endpoint(endpoint.id).await.unwrap();
    let err = webhooks.get_endpoint(endpoint.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_invalid_endpoint_url_is_not_sent() {
    let app = setup_app().await;

    let err = app
        .services()
        .webhooks
        .create_endpoint(&CreateWebhookEndpointRequest::new("not a url"))
        .await
        .unwrap_err();

    assert!(err.field_errors().unwrap().contains_key("url"));
    assert!(app.server.requests().is_empty());
}

#[tokio::test]
async fn test_event_listings() {
    let app = setup_app().await;
    let webhooks = app.services().webhooks;
    let page = PageRequest::default();

    let by_endpoint = webhooks.list_events_by_endpoint(1, page).await.unwrap();
    assert_eq!(by_endpoint.total_elements, 2);

    let failed = webhooks.list_failed_events(page).await.unwrap();
    assert_eq!(failed.content.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(failed.content[0].retry_label(), "1/3");

    let pending = webhooks
        .list_events_by_status(&WebhookEventStatus::Pending, page)
        .await
        .unwrap();
    assert_eq!(pending.content[0].id, 3);
    assert!(pending.content[0].last_attempt.is_none());
    assert_eq!(
        app.server.last_request().unwrap().path,
        "/v1/webhooks/events/status/PENDING"
    );

    let recent = webhooks.list_recent_events(page).await.unwrap();
    assert_eq!(recent.content.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[tokio::test]
async fn test_retry_event() {
    let app = setup_app().await;
    let webhooks = app.services().webhooks;

    let retried = webhooks.retry_event(2).await.unwrap();
    assert_eq!(retried.status, WebhookEventStatus::Retrying);
    assert_eq!(retried.retry_count, 2);

    // 配信済みは再試行できない
    let err = webhooks.retry_event(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(app.notifier.count(), 1);
}

#[tokio::test]
async fn test_statistics() {
    let app = setup_app().await;
    let services = app.services();

    let webhooks = services.webhooks.statistics().await.unwrap();
    assert_eq!(webhooks.total_endpoints, 2);
    assert_eq!(webhooks.enabled_endpoints, 1);
    assert_eq!(webhooks.failed_events, 1);

    let refunds = services.refunds.statistics().await.unwrap();
    assert_eq!(refunds.total_refunds, 1);
    assert_eq!(refunds.success_rate, 100.0);

    let listed = services
        .refunds
        .list_refunds(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.content[0].charge_id, 1);
}
