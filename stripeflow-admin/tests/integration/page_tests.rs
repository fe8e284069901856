// tests/integration/page_tests.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stripeflow_admin::api::dto::CreateChargeRequest;
use stripeflow_admin::api::{NotificationLevel, Route};
use stripeflow_admin::cli::{render_view, ViewOptions};
use stripeflow_admin::domain::{Charge, ChargeFilters};
use stripeflow_admin::pages::{
    AnalyticsPage, CustomersPage, DashboardPage, EventFilter, Loadable, TransactionsPage,
    TransactionsQuery, WebhooksPage,
};
use stripeflow_admin::types::PageRequest;
use stripeflow_admin::ui::{Cell, Column, DataTable, FormState, TableBody};

use crate::common::app_helper::{setup_app, setup_app_with};

fn query() -> TransactionsQuery {
    TransactionsQuery {
        page: PageRequest::default(),
        filters: ChargeFilters::default(),
    }
}

#[tokio::test]
async fn test_dashboard_renders_stats_and_recent_charges() {
    let app = setup_app().await;

    let view = DashboardPage::new(app.page_context()).load().await;

    assert!(view.charge_stats.is_loaded());
    assert!(view.webhook_stats.is_loaded());
    let rendered = view.render();
    assert!(rendered.contains("Total Revenue"));
    assert!(rendered.contains("$10.00"));
    assert!(rendered.contains("John Doe"));
    assert!(rendered.contains("Guest"));
}

#[tokio::test]
async fn test_dashboard_sections_degrade_independently() {
    let app = setup_app_with(None).await;
    app.server.require_auth();

    let view = DashboardPage::new(app.page_context()).load().await;

    // 失敗した部分は読み込み中ではなく失敗として描画する
    assert!(view.charge_stats.is_failed());
    assert!(view.recent.is_failed());
    assert!(view.cards().iter().all(|card| !card.loading && card.value == "n/a"));
    let rendered = view.render();
    assert!(rendered.contains("Failed to load: Authentication required"));
    assert!(!rendered.contains('░'));
    assert_eq!(app.navigator.current(), Route::Login);
    // 失敗したリクエストごとに1件
    assert_eq!(app.notifier.count(), app.server.requests().len());
}

#[tokio::test]
async fn test_transactions_are_cached_until_mutation() {
    let app = setup_app().await;
    let page = TransactionsPage::new(app.page_context());

    let first = page.load(&query()).await.unwrap();
    let second = page.load(&query()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(app.server.requests_to("/v1/charges").len(), 1);

    page.cancel(2).await.unwrap();
    let notifications = app.notifier.notifications();
    assert_eq!(notifications.last().unwrap().level, NotificationLevel::Success);
    assert_eq!(notifications.last().unwrap().message, "Charge #2 canceled");

    // キャンセル後は再取得される
    let refreshed = page.load(&query()).await.unwrap();
    assert_eq!(app.server.requests_to("/v1/charges").len(), 2);
    let canceled = refreshed.content.iter().find(|c| c.id == 2).unwrap();
    assert_eq!(canceled.status.as_str(), "CANCELED");
}

#[tokio::test]
async fn test_create_charge_through_form() {
    let app = setup_app().await;
    let page = TransactionsPage::new(app.page_context());
    let mut form = FormState::default();

    // サーバー側の検証エラーはフォームに残る
    let missing_customer = CreateChargeRequest::new(100, "USD", 999);
    assert!(page.create(&mut form, &missing_customer).await.is_none());
    assert!(!form.is_submitting());
    assert!(form.general_error().is_some());

    let created = page
        .create(&mut form, &CreateChargeRequest::new(100, "USD", 3))
        .await
        .unwrap();
    assert!(!form.has_errors());
    assert_eq!(created.customer_label(), "Bob Tanaka");
}

#[tokio::test]
async fn test_transactions_table_over_live_data() {
    let app = setup_app().await;
    let page = TransactionsPage::new(app.page_context())
        .load(&query())
        .await
        .unwrap();

    let clicked = Arc::new(AtomicUsize::new(0));
    let counter = clicked.clone();
    let table = TransactionsPage::table(&Loadable::Loaded(page)).on_row_click(move |charge: &Charge| {
        counter.store(charge.id as usize, Ordering::SeqCst);
    });

    let view = table.view();
    assert!(view.interactive);
    let TableBody::Rows(rows) = &view.body else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 3);
    assert!(rows[0].cells.iter().any(|cell| cell.text() == "$10.00"));
    assert!(rows[1].cells.iter().any(|cell| cell.text() == "€25.00"));
    assert!(rows[2]
        .cells
        .iter()
        .any(|cell| matches!(cell, Cell::Badge(badge) if badge.label == "FAILED")));

    assert!(table.click(2));
    assert_eq!(clicked.load(Ordering::SeqCst), 3);
    assert!(!table.click(10));
}

#[tokio::test]
async fn test_custom_table_reads_nested_keys() {
    let app = setup_app().await;
    let charge = app.services().charges.get_charge(1).await.unwrap();

    let table = DataTable::new(vec![
        Column::text("customer.email", "Email"),
        Column::text("missing.key", "Missing"),
    ])
    .with_rows(vec![charge]);

    let view = table.view();
    let TableBody::Rows(rows) = &view.body else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].cells[0].text(), "john@example.com");
    assert_eq!(rows[0].cells[1].text(), "-");
}

#[tokio::test]
async fn test_customer_search_renders_empty_state() {
    let app = setup_app().await;
    let page = CustomersPage::new(app.page_context());

    let found = page
        .load(PageRequest::default(), Some("nobody"))
        .await
        .unwrap();

    assert!(found.is_empty());
    assert_eq!(app.server.last_request().unwrap().path, "/v1/customers/search");
    let rendered = CustomersPage::render(&Loadable::Loaded(found), Some("nobody"));
    assert!(rendered.contains("No customers match \"nobody\""));
}

#[tokio::test]
async fn test_webhooks_page_retry_invalidates_events() {
    let app = setup_app().await;
    let page = WebhooksPage::new(app.page_context());

    let view = page.load(PageRequest::default(), EventFilter::Failed).await;
    assert_eq!(view.events.loaded().unwrap().len(), 1);
    assert_eq!(view.endpoints.loaded().unwrap().len(), 2);

    page.retry_event(2).await.unwrap();

    let view = page.load(PageRequest::default(), EventFilter::Failed).await;
    assert!(view.events.loaded().unwrap().is_empty());
    assert_eq!(app.server.requests_to("/v1/webhooks/events/failed").len(), 2);
    assert!(view.render().contains("Failed"));
}

#[tokio::test]
async fn test_analytics_page() {
    let app = setup_app().await;

    let view = AnalyticsPage::new(app.page_context()).load().await;

    assert!(view.charges.is_loaded());
    assert!(view.refunds.is_loaded());
    assert_eq!(view.charts().len(), 3);
    assert!(view.render().contains("Charge Outcomes"));
}

#[tokio::test]
async fn test_render_view_for_each_route() {
    let app = setup_app().await;
    let context = app.page_context();

    for route in [
        Route::Dashboard,
        Route::Transactions,
        Route::Customers,
        Route::Webhooks,
        Route::Analytics,
    ] {
        let rendered = render_view(&context, &ViewOptions::new(route)).await;
        assert!(rendered.starts_with("== "), "{:?}: {}", route, rendered);
    }
    assert_eq!(app.notifier.count(), 0);
}

#[tokio::test]
async fn test_render_view_shows_failure_instead_of_loading() {
    let app = setup_app_with(None).await;
    app.server.require_auth();
    let context = app.page_context();

    for route in [Route::Transactions, Route::Customers, Route::Webhooks, Route::Analytics] {
        let rendered = render_view(&context, &ViewOptions::new(route)).await;
        assert!(rendered.contains("Failed to load: "), "{:?}: {}", route, rendered);
        assert!(!rendered.contains('░'), "{:?}: {}", route, rendered);
    }
}

#[tokio::test]
async fn test_customer_row_click_opens_detail() {
    let app = setup_app().await;
    let page = CustomersPage::new(app.page_context());
    let customers = Loadable::from(page.load(PageRequest::default(), None).await);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let table = CustomersPage::selectable_table(&customers, None, move |id| {
        let _ = tx.send(id);
    });
    assert!(table.view().interactive);
    let index = table.rows().iter().position(|c| c.name == "John Doe").unwrap();
    assert!(table.click(index));
    let selected = rx.recv().await.unwrap();
    assert_eq!(selected, 1);

    let detail = page.detail(selected).await;

    let customer = detail.customer.loaded().unwrap();
    assert_eq!(customer.email, "john@example.com");
    let charges = detail.charges.loaded().unwrap();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges.content[0].id, 1);

    let by_customer = app.server.requests_to("/v1/charges/customer/1");
    assert_eq!(by_customer.len(), 1);
    assert!(by_customer[0].query.as_deref().unwrap().contains("size=10"));

    let rendered = detail.render();
    assert!(rendered.starts_with("== Customer #1 John Doe =="));
    assert!(rendered.contains("Phone:         Not provided"));
    assert!(rendered.contains("Pro plan"));
    assert!(rendered.ends_with("Page 1 of 1 (1 total)"));
}

#[tokio::test]
async fn test_customer_detail_not_found() {
    let app = setup_app().await;
    let mut options = ViewOptions::new(Route::Customers);
    options.detail_id = Some(999);

    let rendered = render_view(&app.page_context(), &options).await;

    assert!(rendered.starts_with("== Customer #999 =="));
    assert!(rendered.contains("Customer not found"));
    assert_eq!(app.notifier.count(), 1);
}
