// src/pages/transactions.rs

use crate::api::dto::CreateChargeRequest;
use crate::domain::{Charge, ChargeFilters};
use crate::error::AppResult;
use crate::service::filter_params;
use crate::types::{Page, PageRequest, QueryParams};
use crate::ui::format::truncate;
use crate::ui::{Column, DataTable, FormState};

use super::{section, table_for, with_summary, Loadable, PageContext};

const CHARGES_PATH: &str = "/v1/charges";

/// 一覧の表示条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsQuery {
    pub page: PageRequest,
    pub filters: ChargeFilters,
}

impl TransactionsQuery {
    pub fn params(&self) -> QueryParams {
        filter_params(&self.filters).merge(&QueryParams::with_page(self.page))
    }
}

pub fn charge_columns() -> Vec<Column<Charge>> {
    vec![
        Column::text("id", "ID"),
        Column::currency("amount", "Amount", "currency"),
        Column::status("status", "Status"),
        Column::custom("customer", "Customer", |_, charge: &Charge| charge.customer_label()),
        Column::custom("description", "Description", |value, _: &Charge| {
            truncate(value.as_str().unwrap_or("-"), 32)
        }),
        Column::text("paymentMethod", "Method"),
        Column::date_time("createdAt", "Created"),
    ]
}

pub struct TransactionsPage {
    context: PageContext,
}

impl TransactionsPage {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    pub async fn load(&self, query: &TransactionsQuery) -> AppResult<Page<Charge>> {
        let charges = &self.context.services.charges;
        self.context
            .cached(CHARGES_PATH, &query.params(), || {
                charges.list_charges(query.page, &query.filters)
            })
            .await
    }

    pub async fn detail(&self, id: i64) -> AppResult<Charge> {
        self.context.services.charges.get_charge(id).await
    }

    /// 取引を作成（フォームのエラー表示も更新する）
    pub async fn create(
        &self,
        form: &mut FormState,
        request: &CreateChargeRequest,
    ) -> Option<Charge> {
        form.begin_submit();
        let result = self.context.services.charges.create_charge(request).await;
        let charge = form.finish(result)?;

        self.context.cache.invalidate(CHARGES_PATH).await;
        self.context
            .notify_success(format!("Charge #{} created", charge.id));
        Some(charge)
    }

    pub async fn cancel(&self, id: i64) -> AppResult<Charge> {
        let charge = self.context.services.charges.cancel_charge(id).await?;
        self.context.cache.invalidate(CHARGES_PATH).await;
        self.context
            .notify_success(format!("Charge #{} canceled", id));
        Ok(charge)
    }

    pub fn table(state: &Loadable<Page<Charge>>) -> DataTable<Charge> {
        let table = DataTable::new(charge_columns()).with_empty_message("No transactions found");
        table_for(table, state)
    }

    pub fn render(query: &TransactionsQuery, state: &Loadable<Page<Charge>>) -> String {
        let body = with_summary(Self::table(state).render_text(), state);
        section(&format!("Transactions{}", describe_filters(&query.filters)), &body)
    }
}

fn describe_filters(filters: &ChargeFilters) -> String {
    let mut parts = Vec::new();
    if let Some(status) = &filters.status {
        parts.push(format!("status={}", status));
    }
    if let Some(currency) = &filters.currency {
        parts.push(format!("currency={}", currency));
    }
    if let Some(customer_id) = filters.customer_id {
        parts.push(format!("customer={}", customer_id));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}
