// src/domain/mod.rs

pub mod charge_model;
pub mod customer_model;
pub mod payment_status;
pub mod refund_model;
pub mod statistics_model;
pub mod webhook_model;

pub use charge_model::{Charge, ChargeFilters};
pub use customer_model::{Address, Customer, CustomerSummary};
pub use payment_status::{ChargeStatus, RefundStatus, WebhookEventStatus};
pub use refund_model::Refund;
pub use statistics_model::{ChargeStatistics, RefundStatistics, WebhookStatistics};
pub use webhook_model::{WebhookEndpoint, WebhookEvent};
