// tests/common/mock_server.rs
//
// StripeFlow APIのインプロセスモック
// シードデータをメモリに持ち、Springのページ形式で返す

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const VALID_TOKEN: &str = "test-token";
pub const VALID_API_KEY: &str = "test-key";

/// モックが受けたリクエスト
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub api_key: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Default)]
pub struct MockState {
    pub charges: Mutex<Vec<Value>>,
    pub customers: Mutex<Vec<Value>>,
    pub endpoints: Mutex<Vec<Value>>,
    pub events: Mutex<Vec<Value>>,
    pub refunds: Mutex<Vec<Value>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
    pub require_auth: AtomicBool,
    next_id: AtomicI64,
}

impl MockState {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

type Shared = Arc<MockState>;

pub struct MockServer {
    pub base_url: String,
    pub state: Shared,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// シードデータ入りで起動
    pub async fn start() -> Self {
        let state = Arc::new(seeded_state());
        let app = router(state.clone());

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).await.unwrap();
        let actual_addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{}/api", actual_addr),
            state,
            handle,
        }
    }

    /// 資格情報がないリクエストを401にする
    pub fn require_auth(&self) {
        self.state.require_auth.store(true, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().last().cloned()
    }

    pub fn charge(&self, id: i64) -> Option<Value> {
        find(&self.state.charges, id)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router(state: Shared) -> Router {
    let api = Router::new()
        // charges
        .route("/v1/charges", get(list_charges).post(create_charge))
        .route("/v1/charges/recent", get(recent_charges))
        .route("/v1/charges/statistics", get(charge_statistics))
        .route("/v1/charges/status/{status}", get(charges_by_status))
        .route("/v1/charges/currency/{currency}", get(charges_by_currency))
        .route("/v1/charges/customer/{id}", get(charges_by_customer))
        .route("/v1/charges/{id}", get(get_charge))
        .route("/v1/charges/{id}/status", put(update_charge_status))
        .route("/v1/charges/{id}/cancel", put(cancel_charge))
        // customers
        .route("/v1/customers", get(list_customers).post(create_customer))
        .route("/v1/customers/search", get(search_customers))
        .route("/v1/customers/successful-charges", get(customers_with_successful_charges))
        .route(
            "/v1/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        // webhooks
        .route("/v1/webhooks/endpoints", get(list_endpoints).post(create_endpoint))
        .route(
            "/v1/webhooks/endpoints/{id}",
            get(get_endpoint).put(update_endpoint).delete(delete_endpoint),
        )
        .route("/v1/webhooks/endpoints/{id}/toggle", put(toggle_endpoint))
        .route("/v1/webhooks/endpoints/{id}/events", get(events_by_endpoint))
        .route("/v1/webhooks/events/recent", get(recent_events))
        .route("/v1/webhooks/events/failed", get(failed_events))
        .route("/v1/webhooks/events/status/{status}", get(events_by_status))
        .route("/v1/webhooks/events/{id}/retry", put(retry_event))
        .route("/v1/webhooks/statistics", get(webhook_statistics))
        // refunds
        .route("/v1/refunds", get(list_refunds))
        .route("/v1/refunds/statistics", get(refund_statistics))
        // エラー応答の確認用
        .route("/v1/errors/{code}", get(error_response))
        .route("/v1/broken", get(broken_body));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record_and_authorize))
        .with_state(state)
}

async fn record_and_authorize(State(state): State<Shared>, request: Request, next: Next) -> Response {
    // リクエストの借用は await の前に手放す
    let recorded = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        RecordedRequest {
            method: request.method().to_string(),
            path: request.uri().path().trim_start_matches("/api").to_string(),
            query: request.uri().query().map(str::to_string),
            authorization: header("authorization"),
            api_key: header("x-api-key"),
            request_id: header("x-request-id"),
        }
    };

    let bearer = format!("Bearer {}", VALID_TOKEN);
    let authorized = recorded.authorization.as_deref() == Some(bearer.as_str())
        || recorded.api_key.as_deref() == Some(VALID_API_KEY);
    state.requests.lock().unwrap().push(recorded);

    if state.require_auth.load(Ordering::SeqCst) && !authorized {
        return error(StatusCode::UNAUTHORIZED, "Authentication required");
    }

    next.run(request).await
}

// --- helpers ---

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    page: Option<u32>,
    size: Option<u32>,
    status: Option<String>,
    currency: Option<String>,
    customer_id: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ToggleQuery {
    enabled: bool,
}

fn paginate(items: Vec<Value>, query: &ListQuery) -> Json<Value> {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(20).max(1);
    let total = items.len() as u64;
    let total_pages = total.div_ceil(size as u64) as u32;
    let content: Vec<Value> = items
        .into_iter()
        .skip((page * size) as usize)
        .take(size as usize)
        .collect();

    Json(json!({
        "content": content,
        "number": page,
        "size": size,
        "totalElements": total,
        "totalPages": total_pages,
        "first": page == 0,
        "last": page + 1 >= total_pages,
    }))
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "message": message,
            "status": status.as_u16(),
            "timestamp": "2024-01-01T00:00:00",
        })),
    )
        .into_response()
}

fn validation_error(errors: Value) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "message": "Validation failed",
            "errors": errors,
            "status": 422,
        })),
    )
        .into_response()
}

fn find(store: &Mutex<Vec<Value>>, id: i64) -> Option<Value> {
    store
        .lock()
        .unwrap()
        .iter()
        .find(|v| v["id"] == id)
        .cloned()
}

fn update<F: FnOnce(&mut Value)>(store: &Mutex<Vec<Value>>, id: i64, f: F) -> Option<Value> {
    let mut items = store.lock().unwrap();
    let item = items.iter_mut().find(|v| v["id"] == id)?;
    f(item);
    Some(item.clone())
}

fn filtered<F: Fn(&Value) -> bool>(store: &Mutex<Vec<Value>>, f: F) -> Vec<Value> {
    store
        .lock()
        .unwrap()
        .iter()
        .filter(|v| f(*v))
        .cloned()
        .collect()
}

fn not_found(resource: &str, id: i64) -> Response {
    error(
        StatusCode::NOT_FOUND,
        &format!("{} not found with id: {}", resource, id),
    )
}

fn found(value: Option<Value>, resource: &str, id: i64) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => not_found(resource, id),
    }
}

fn newest_first(mut items: Vec<Value>) -> Vec<Value> {
    items.sort_by(|a, b| b["createdAt"].as_str().cmp(&a["createdAt"].as_str()));
    items
}

// --- charges ---

async fn list_charges(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    let items = filtered(&state.charges, |c| {
        q.status.as_deref().map_or(true, |s| c["status"] == s)
            && q.currency.as_deref().map_or(true, |cur| c["currency"] == cur)
            && q.customer_id.map_or(true, |id| c["customer"]["id"] == id)
    });
    paginate(items, &q)
}

async fn recent_charges(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    paginate(newest_first(filtered(&state.charges, |_| true)), &q)
}

async fn charges_by_status(
    State(state): State<Shared>,
    Path(status): Path<String>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    paginate(filtered(&state.charges, |c| c["status"] == status.as_str()), &q)
}

async fn charges_by_currency(
    State(state): State<Shared>,
    Path(currency): Path<String>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    paginate(filtered(&state.charges, |c| c["currency"] == currency.as_str()), &q)
}

async fn charges_by_customer(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    paginate(filtered(&state.charges, |c| c["customer"]["id"] == id), &q)
}

async fn get_charge(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    found(find(&state.charges, id), "Charge", id)
}

async fn create_charge(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let amount = body["amount"].as_i64().unwrap_or(0);
    if amount <= 0 {
        return validation_error(json!({"amount": "Amount must be positive"}));
    }

    let customer = body["customerId"]
        .as_i64()
        .and_then(|id| find(&state.customers, id))
        .map(|c| json!({"id": c["id"], "name": c["name"], "email": c["email"]}));
    let Some(customer) = customer else {
        return error(StatusCode::NOT_FOUND, "Customer not found");
    };

    let charge = json!({
        "id": state.next_id(),
        "amount": amount,
        "currency": body["currency"],
        "status": "PENDING",
        "customer": customer,
        "description": body["description"],
        "idempotencyKey": body["idempotencyKey"],
        "createdAt": "2024-02-01T09:00:00",
        "updatedAt": "2024-02-01T09:00:00",
    });
    state.charges.lock().unwrap().push(charge.clone());
    (StatusCode::CREATED, Json(charge)).into_response()
}

async fn update_charge_status(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Query(q): Query<StatusQuery>,
) -> Response {
    let updated = update(&state.charges, id, |c| c["status"] = json!(q.status));
    found(updated, "Charge", id)
}

async fn cancel_charge(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let Some(charge) = find(&state.charges, id) else {
        return not_found("Charge", id);
    };
    if !matches!(charge["status"].as_str(), Some("PENDING" | "PROCESSING")) {
        return error(
            StatusCode::CONFLICT,
            "Only pending or processing charges can be canceled",
        );
    }
    found(
        update(&state.charges, id, |c| c["status"] = json!("CANCELED")),
        "Charge",
        id,
    )
}

async fn charge_statistics(State(state): State<Shared>) -> Json<Value> {
    let charges = state.charges.lock().unwrap().clone();
    let total = charges.len() as u64;
    let succeeded: Vec<&Value> = charges.iter().filter(|c| c["status"] == "SUCCEEDED").collect();
    let failed = charges.iter().filter(|c| c["status"] == "FAILED").count() as u64;
    let revenue: i64 = succeeded.iter().filter_map(|c| c["amount"].as_i64()).sum();
    let rate = if total == 0 {
        0.0
    } else {
        succeeded.len() as f64 * 100.0 / total as f64
    };

    Json(json!({
        "totalCharges": total,
        "successfulCharges": succeeded.len(),
        "failedCharges": failed,
        "successRate": rate,
        "totalRevenue": revenue,
    }))
}

// --- customers ---

async fn list_customers(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    let items = filtered(&state.customers, |c| name_matches(c, q.name.as_deref()));
    paginate(items, &q)
}

async fn search_customers(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    let items = filtered(&state.customers, |c| name_matches(c, q.name.as_deref()));
    paginate(items, &q)
}

fn name_matches(customer: &Value, name: Option<&str>) -> bool {
    match name {
        Some(name) => customer["name"]
            .as_str()
            .is_some_and(|n| n.to_lowercase().contains(&name.to_lowercase())),
        None => true,
    }
}

async fn customers_with_successful_charges(
    State(state): State<Shared>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    let ids: Vec<Value> = filtered(&state.charges, |c| c["status"] == "SUCCEEDED")
        .iter()
        .map(|c| c["customer"]["id"].clone())
        .collect();
    paginate(filtered(&state.customers, |c| ids.contains(&c["id"])), &q)
}

async fn get_customer(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    found(find(&state.customers, id), "Customer", id)
}

async fn create_customer(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let duplicate = !filtered(&state.customers, |c| c["email"] == email.as_str()).is_empty();
    if duplicate {
        return error(
            StatusCode::CONFLICT,
            &format!("Customer with email {} already exists", email),
        );
    }

    let customer = json!({
        "id": state.next_id(),
        "name": body["name"],
        "email": email,
        "phone": body["phone"],
        "address": body["address"],
        "totalSpent": 0,
        "totalTransactions": 0,
        "createdAt": "2024-02-01T09:00:00",
        "updatedAt": "2024-02-01T09:00:00",
    });
    state.customers.lock().unwrap().push(customer.clone());
    (StatusCode::CREATED, Json(customer)).into_response()
}

async fn update_customer(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let updated = update(&state.customers, id, |c| {
        c["name"] = body["name"].clone();
        c["email"] = body["email"].clone();
        c["phone"] = body["phone"].clone();
    });
    found(updated, "Customer", id)
}

async fn delete_customer(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut customers = state.customers.lock().unwrap();
    let before = customers.len();
    customers.retain(|c| c["id"] != id);
    if customers.len() == before {
        return not_found("Customer", id);
    }
    StatusCode::NO_CONTENT.into_response()
}

// --- webhooks ---

async fn list_endpoints(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    paginate(filtered(&state.endpoints, |_| true), &q)
}

async fn get_endpoint(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    found(find(&state.endpoints, id), "Webhook endpoint", id)
}

async fn create_endpoint(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let endpoint = json!({
        "id": state.next_id(),
        "url": body["url"],
        "enabled": body["enabled"].as_bool().unwrap_or(true),
        "description": body["description"],
        "createdAt": "2024-02-01T09:00:00",
        "updatedAt": "2024-02-01T09:00:00",
    });
    state.endpoints.lock().unwrap().push(endpoint.clone());
    (StatusCode::CREATED, Json(endpoint)).into_response()
}

async fn update_endpoint(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let updated = update(&state.endpoints, id, |e| {
        e["url"] = body["url"].clone();
        e["description"] = body["description"].clone();
        if let Some(enabled) = body["enabled"].as_bool() {
            e["enabled"] = json!(enabled);
        }
    });
    found(updated, "Webhook endpoint", id)
}

async fn delete_endpoint(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut endpoints = state.endpoints.lock().unwrap();
    let before = endpoints.len();
    endpoints.retain(|e| e["id"] != id);
    if endpoints.len() == before {
        return not_found("Webhook endpoint", id);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn toggle_endpoint(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Query(q): Query<ToggleQuery>,
) -> Response {
    let updated = update(&state.endpoints, id, |e| e["enabled"] = json!(q.enabled));
    found(updated, "Webhook endpoint", id)
}

async fn events_by_endpoint(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    paginate(filtered(&state.events, |e| e["endpointId"] == id), &q)
}

async fn recent_events(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    paginate(newest_first(filtered(&state.events, |_| true)), &q)
}

async fn failed_events(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    paginate(filtered(&state.events, |e| e["status"] == "FAILED"), &q)
}

async fn events_by_status(
    State(state): State<Shared>,
    Path(status): Path<String>,
    Query(q): Query<ListQuery>,
) -> Json<Value> {
    paginate(filtered(&state.events, |e| e["status"] == status.as_str()), &q)
}

async fn retry_event(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let Some(event) = find(&state.events, id) else {
        return not_found("Webhook event", id);
    };
    if event["status"] == "DELIVERED" {
        return error(StatusCode::CONFLICT, "Delivered events cannot be retried");
    }
    let updated = update(&state.events, id, |e| {
        e["status"] = json!("RETRYING");
        e["retryCount"] = json!(e["retryCount"].as_u64().unwrap_or(0) + 1);
    });
    found(updated, "Webhook event", id)
}

async fn webhook_statistics(State(state): State<Shared>) -> Json<Value> {
    let endpoints = state.endpoints.lock().unwrap().clone();
    let events = state.events.lock().unwrap().clone();
    let count = |status: &str| events.iter().filter(|e| e["status"] == status).count();
    let delivered = count("DELIVERED");

    Json(json!({
        "totalEndpoints": endpoints.len(),
        "enabledEndpoints": endpoints.iter().filter(|e| e["enabled"] == true).count(),
        "totalEvents": events.len(),
        "pendingEvents": count("PENDING"),
        "deliveredEvents": delivered,
        "failedEvents": count("FAILED"),
        "deliverySuccessRate": if events.is_empty() { 0.0 } else { delivered as f64 * 100.0 / events.len() as f64 },
    }))
}

// --- refunds ---

async fn list_refunds(State(state): State<Shared>, Query(q): Query<ListQuery>) -> Json<Value> {
    paginate(filtered(&state.refunds, |_| true), &q)
}

async fn refund_statistics(State(state): State<Shared>) -> Json<Value> {
    let refunds = state.refunds.lock().unwrap().clone();
    let succeeded = refunds.iter().filter(|r| r["status"] == "SUCCEEDED").count();
    Json(json!({
        "totalRefunds": refunds.len(),
        "successfulRefunds": succeeded,
        "failedRefunds": refunds.iter().filter(|r| r["status"] == "FAILED").count(),
        "successRate": if refunds.is_empty() { 0.0 } else { succeeded as f64 * 100.0 / refunds.len() as f64 },
    }))
}

// --- errors ---

async fn error_response(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match code {
        422 => validation_error(json!({
            "email": "Invalid email format",
            "amount": ["Amount must be positive", "Amount is required"],
        })),
        // messageなし、errorのみのボディ
        503 => (status, Json(json!({"error": "Service Unavailable"}))).into_response(),
        // ボディなし
        418 => status.into_response(),
        _ => error(status, &format!("Mock error {}", code)),
    }
}

async fn broken_body() -> Response {
    (StatusCode::OK, "not json").into_response()
}

// --- seed ---

fn seeded_state() -> MockState {
    let state = MockState {
        next_id: AtomicI64::new(100),
        ..Default::default()
    };

    *state.customers.lock().unwrap() = vec![
        customer(1, "John Doe", "john@example.com", 1_000, 1),
        customer(2, "Jane Smith", "jane@example.com", 0, 1),
        customer(3, "Bob Tanaka", "bob@example.com", 0, 0),
    ];

    *state.charges.lock().unwrap() = vec![
        json!({
            "id": 1, "amount": 1000, "currency": "USD", "status": "SUCCEEDED",
            "customer": {"id": 1, "name": "John Doe", "email": "john@example.com"},
            "paymentMethod": "card", "description": "Pro plan",
            "createdAt": "2024-01-01T10:00:00", "updatedAt": "2024-01-01T10:00:05",
        }),
        json!({
            "id": 2, "amount": 2500, "currency": "EUR", "status": "PENDING",
            "customer": {"id": 2, "name": "Jane Smith", "email": "jane@example.com"},
            "createdAt": "2024-01-02T11:30:00", "updatedAt": "2024-01-02T11:30:00",
        }),
        json!({
            "id": 3, "amount": 500, "currency": "USD", "status": "FAILED",
            "customer": null, "description": "Guest checkout",
            "createdAt": "2024-01-03T08:15:00Z", "updatedAt": "2024-01-03T08:15:00Z",
        }),
    ];

    *state.endpoints.lock().unwrap() = vec![
        json!({
            "id": 1, "url": "https://example.com/hooks", "enabled": true,
            "description": "Primary", "createdAt": "2024-01-01T00:00:00", "updatedAt": "2024-01-01T00:00:00",
        }),
        json!({
            "id": 2, "url": "https://example.org/disabled", "enabled": false,
            "createdAt": "2024-01-01T00:00:00", "updatedAt": "2024-01-01T00:00:00",
        }),
    ];

    *state.events.lock().unwrap() = vec![
        event(1, 1, "charge.succeeded", "DELIVERED", 0, Some(200)),
        event(2, 1, "charge.failed", "FAILED", 1, Some(500)),
        event(3, 2, "customer.created", "PENDING", 0, None),
    ];

    *state.refunds.lock().unwrap() = vec![json!({
        "id": 1, "chargeId": 1, "amount": 500, "status": "SUCCEEDED", "reason": "requested_by_customer",
        "createdAt": "2024-01-05T00:00:00", "updatedAt": "2024-01-05T00:00:00",
    })];

    state
}

fn customer(id: i64, name: &str, email: &str, total_spent: i64, transactions: u64) -> Value {
    json!({
        "id": id, "name": name, "email": email, "phone": null,
        "totalSpent": total_spent, "totalTransactions": transactions,
        "createdAt": format!("2023-12-0{}T09:00:00", id), "updatedAt": "2023-12-10T09:00:00",
    })
}

fn event(
    id: i64,
    endpoint_id: i64,
    event_type: &str,
    status: &str,
    retry_count: u32,
    response_code: Option<u16>,
) -> Value {
    json!({
        "id": id, "endpointId": endpoint_id, "eventType": event_type,
        "eventData": "{}", "status": status, "retryCount": retry_count, "maxRetries": 3,
        "lastAttempt": if response_code.is_some() { json!("2024-01-04T12:00:00") } else { Value::Null },
        "responseCode": response_code,
        "createdAt": format!("2024-01-0{}T12:00:00", id), "updatedAt": "2024-01-04T12:00:00",
    })
}
