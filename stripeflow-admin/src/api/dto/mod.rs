// src/api/dto/mod.rs

pub mod charge_dto;
pub mod customer_dto;
pub mod refund_dto;
pub mod webhook_dto;

pub use charge_dto::CreateChargeRequest;
pub use customer_dto::{AddressDto, CreateCustomerRequest};
pub use refund_dto::CreateRefundRequest;
pub use webhook_dto::CreateWebhookEndpointRequest;
