// src/service/mod.rs
pub mod charge_service;
pub mod customer_service;
pub mod refund_service;
pub mod webhook_service;

use std::sync::Arc;

use crate::api::ApiClient;

pub use charge_service::{filter_params, ChargeService};
pub use customer_service::CustomerService;
pub use refund_service::RefundService;
pub use webhook_service::WebhookService;

/// 同じクライアントを共有するサービス群
#[derive(Clone)]
pub struct Services {
    pub charges: ChargeService,
    pub customers: CustomerService,
    pub webhooks: WebhookService,
    pub refunds: RefundService,
}

impl Services {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            charges: ChargeService::new(client.clone()),
            customers: CustomerService::new(client.clone()),
            webhooks: WebhookService::new(client.clone()),
            refunds: RefundService::new(client),
        }
    }
}
