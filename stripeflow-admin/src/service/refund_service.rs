// src/service/refund_service.rs

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::CreateRefundRequest;
use crate::api::ApiClient;
use crate::domain::{Refund, RefundStatistics, RefundStatus};
use crate::error::AppResult;
use crate::types::{path_segment, Page, PageRequest, QueryParams};

const BASE_PATH: &str = "/v1/refunds";

#[derive(Clone)]
pub struct RefundService {
    client: Arc<ApiClient>,
}

impl RefundService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_refunds(&self, page: PageRequest) -> AppResult<Page<Refund>> {
        self.client
            .get_paginated(BASE_PATH, page, &QueryParams::new())
            .await
    }

    pub async fn get_refund(&self, id: i64) -> AppResult<Refund> {
        self.client
            .get(&format!("{}/{}", BASE_PATH, id), &QueryParams::new())
            .await
    }

    pub async fn create_refund(&self, request: &CreateRefundRequest) -> AppResult<Refund> {
        request.validate()?;
        let refund: Refund = self.client.post(BASE_PATH, request).await?;
        tracing::info!(refund_id = refund.id, charge_id = refund.charge_id, "Refund created");
        Ok(refund)
    }

    pub async fn list_by_charge(&self, charge_id: i64, page: PageRequest) -> AppResult<Page<Refund>> {
        self.client
            .get_paginated(
                &format!("{}/charge/{}", BASE_PATH, charge_id),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_by_status(
        &self,
        status: &RefundStatus,
        page: PageRequest,
    ) -> AppResult<Page<Refund>> {
        self.client
            .get_paginated(
                &format!("{}/status/{}", BASE_PATH, path_segment(status.as_str())),
                page,
                &QueryParams::new(),
            )
            .await
    }

    pub async fn list_recent(&self, page: PageRequest) -> AppResult<Page<Refund>> {
        self.client
            .get_paginated(&format!("{}/recent", BASE_PATH), page, &QueryParams::new())
            .await
    }

    pub async fn update_status(&self, id: i64, status: &RefundStatus) -> AppResult<Refund> {
        let params = QueryParams::new().set("status", status.as_str());
        self.client
            .put_empty(&format!("{}/{}/status", BASE_PATH, id), &params)
            .await
    }

    pub async fn cancel_refund(&self, id: i64) -> AppResult<Refund> {
        let refund: Refund = self
            .client
            .put_empty(&format!("{}/{}/cancel", BASE_PATH, id), &QueryParams::new())
            .await?;
        tracing::info!(refund_id = id, "Refund canceled");
        Ok(refund)
    }

    pub async fn statistics(&self) -> AppResult<RefundStatistics> {
        self.client
            .get(&format!("{}/statistics", BASE_PATH), &QueryParams::new())
            .await
    }
}
