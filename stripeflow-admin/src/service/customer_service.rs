// src/service/customer_service.rs

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::CreateCustomerRequest;
use crate::api::ApiClient;
use crate::domain::Customer;
use crate::error::AppResult;
use crate::types::{Page, PageRequest, QueryParams};

const BASE_PATH: &str = "/v1/customers";

#[derive(Clone)]
pub struct CustomerService {
    client: Arc<ApiClient>,
}

impl CustomerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 顧客一覧（検索語があれば name として送る）
    pub async fn list_customers(
        &self,
        page: PageRequest,
        search: Option<&str>,
    ) -> AppResult<Page<Customer>> {
        let params = QueryParams::new().set_opt("name", non_blank(search));
        self.client.get_paginated(BASE_PATH, page, &params).await
    }

    pub async fn get_customer(&self, id: i64) -> AppResult<Customer> {
        self.client
            .get(&format!("{}/{}", BASE_PATH, id), &QueryParams::new())
            .await
    }

    pub async fn create_customer(&self, request: &CreateCustomerRequest) -> AppResult<Customer> {
        request.validate()?;
        let customer: Customer = self.client.post(BASE_PATH, request).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    pub async fn update_customer(
        &self,
        id: i64,
        request: &CreateCustomerRequest,
    ) -> AppResult<Customer> {
        request.validate()?;
        let customer: Customer = self
            .client
            .put(&format!("{}/{}", BASE_PATH, id), request)
            .await?;
        tracing::info!(customer_id = id, "Customer updated");
        Ok(customer)
    }

    pub async fn delete_customer(&self, id: i64) -> AppResult<()> {
        self.client
            .delete::<()>(&format!("{}/{}", BASE_PATH, id))
            .await?;
        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }

    /// 名前による検索（部分一致はサーバー側）
    pub async fn search_customers(&self, name: &str, page: PageRequest) -> AppResult<Page<Customer>> {
        let params = QueryParams::new().set("name", name.trim());
        self.client
            .get_paginated(&format!("{}/search", BASE_PATH), page, &params)
            .await
    }

    /// 成功した課金を持つ顧客
    pub async fn list_with_successful_charges(&self, page: PageRequest) -> AppResult<Page<Customer>> {
        self.client
            .get_paginated(
                &format!("{}/successful-charges", BASE_PATH),
                page,
                &QueryParams::new(),
            )
            .await
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
