// src/service/charge_service.rs

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::CreateChargeRequest;
use crate::api::ApiClient;
use crate::domain::{Charge, ChargeFilters, ChargeStatistics, ChargeStatus};
use crate::error::AppResult;
use crate::types::{path_segment, Page, PageRequest, QueryParams};

const BASE_PATH: &str = "/v1/charges";

#[derive(Clone)]
pub struct ChargeService {
    client: Arc<ApiClient>,
}

impl ChargeService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 課金一覧を取得（絞り込み条件はクエリパラメータとして送る）
    pub async fn list_charges(
        &self,
        page: PageRequest,
        filters: &ChargeFilters,
    ) -> AppResult<Page<Charge>> {
        let params = filter_params(filters);
        self.client.get_paginated(BASE_PATH, page, &params).await
    }

    pub async fn get_charge(&self, id: i64) -> AppResult<Charge> {
        self.client
            .get(&format!("{}/{}", BASE_PATH, id), &QueryParams::new())
            .await
    }

    /// 課金を作成（冪等キー未指定ならここで採番）
    pub async fn create_charge(&self, request: &CreateChargeRequest) -> AppResult<Charge> {
        request.validate()?;

        let mut request = request.clone();
        if request.idempotency_key.is_none() {
            request.idempotency_key = Some(uuid::Uuid::new_v4().to_string());
        }

        let charge: Charge = self.client.post(BASE_PATH, &request).await?;
        tracing::info!(charge_id = charge.id, amount = charge.amount, currency = %charge.currency, "Charge created");
        Ok(charge)
    }

    pub async fn list_by_customer(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> AppResult<Page<Charge>> {
        self.client
            .get_paginated(
                &format!("{}/customer/{}", BASE_PATH, customer_id),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_by_status(
        &self,
        status: &ChargeStatus,
        page: PageRequest,
    ) -> AppResult<Page<Charge>> {
        self.client
            .get_paginated(
                &format!("{}/status/{}", BASE_PATH, path_segment(status.as_str())),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_by_currency(&self, currency: &str, page: PageRequest) -> AppResult<Page<Charge>> {
        self.client
            .get_paginated(
                &format!("{}/currency/{}", BASE_PATH, path_segment(&currency.to_uppercase())),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_recent(&self, page: PageRequest) -> AppResult<Page<Charge>> {
        self.client
            .get_paginated(&format!("{}/recent", BASE_PATH), page, &QueryParams::new())
            .await
    }

    pub async fn update_status(&self, id: i64, status: &ChargeStatus) -> AppResult<Charge> {
        let params = QueryParams::new().set("status", status.as_str());
        self.client
            .put_empty(&format!("{}/{}/status", BASE_PATH, id), &params)
            .await
    }

    pub async fn cancel_charge(&self, id: i64) -> AppResult<Charge> {
        let charge: Charge = self
            .client
            .put_empty(&format!("{}/{}/cancel", BASE_PATH, id), &QueryParams::new())
            .await?;
        tracing::info!(charge_id = id, "Charge canceled");
        Ok(charge)
    }

    pub async fn statistics(&self) -> AppResult<ChargeStatistics> {
        self.client
            .get(&format!("{}/statistics", BASE_PATH), &QueryParams::new())
            .await
    }
}

/// 絞り込み条件をクエリパラメータに変換（未指定の項目は送らない）
pub fn filter_params(filters: &ChargeFilters) -> QueryParams {
    QueryParams::new()
        .set_opt("status", filters.status.as_ref().map(ChargeStatus::as_str))
        .set_opt("currency", filters.currency.as_ref())
        .set_opt("customerId", filters.customer_id)
        .set_opt("startDate", filters.start_date.as_ref())
        .set_opt("endDate", filters.end_date.as_ref())
        .set_opt("minAmount", filters.min_amount)
        .set_opt("maxAmount", filters.max_amount)
}
