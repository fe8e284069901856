// src/pages/dashboard.rs

use crate::domain::{Charge, ChargeStatistics, WebhookStatistics};
use crate::types::{Page, PageRequest, QueryParams};
use crate::ui::format::{format_count, format_currency, format_percent};
use crate::ui::{ChangeType, Column, DataTable, StatsCard};

use super::{section, table_for, Loadable, PageContext};

const RECENT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub charge_stats: Loadable<ChargeStatistics>,
    pub webhook_stats: Loadable<WebhookStatistics>,
    pub recent: Loadable<Page<Charge>>,
}

impl DashboardView {
    pub fn cards(&self) -> Vec<StatsCard> {
        const CHARGE_TITLES: [&str; 3] = ["Total Revenue", "Transactions", "Success Rate"];
        let mut cards = Vec::with_capacity(4);

        match &self.charge_stats {
            Loadable::Loaded(stats) => {
                cards.push(StatsCard::new(
                    "Total Revenue",
                    format_currency(stats.total_revenue.unwrap_or(0), "USD"),
                ));
                cards.push(
                    StatsCard::new("Transactions", format_count(stats.total_charges))
                        .with_change(
                            format!("{} failed", format_count(stats.failed_charges)),
                            if stats.failed_charges > 0 {
                                ChangeType::Negative
                            } else {
                                ChangeType::Neutral
                            },
                        ),
                );
                cards.push(StatsCard::new("Success Rate", format_percent(stats.success_rate)));
            }
            Loadable::Loading => cards.extend(CHARGE_TITLES.map(StatsCard::loading)),
            Loadable::Failed(_) => cards.extend(CHARGE_TITLES.map(StatsCard::unavailable)),
        }

        cards.push(match &self.webhook_stats {
            Loadable::Loaded(stats) => StatsCard::new(
                "Webhook Delivery",
                format_percent(stats.delivery_success_rate),
            )
            .with_change(
                format!("{} pending", format_count(stats.pending_events)),
                ChangeType::Neutral,
            ),
            Loadable::Loading => StatsCard::loading("Webhook Delivery"),
            Loadable::Failed(_) => StatsCard::unavailable("Webhook Delivery"),
        });

        cards
    }

    pub fn recent_table(&self) -> DataTable<Charge> {
        let table = DataTable::new(recent_columns()).with_empty_message("No recent transactions");
        table_for(table, &self.recent)
    }

    pub fn render(&self) -> String {
        let cards = self
            .cards()
            .iter()
            .map(StatsCard::render)
            .collect::<Vec<_>>()
            .join("\n");
        [
            section("Overview", &cards),
            section("Recent Transactions", &self.recent_table().render_text()),
        ]
        .join("\n\n")
    }
}

fn recent_columns() -> Vec<Column<Charge>> {
    vec![
        Column::text("id", "ID"),
        Column::custom("customer", "Customer", |_, charge: &Charge| charge.customer_label()),
        Column::currency("amount", "Amount", "currency"),
        Column::status("status", "Status"),
        Column::date_time("createdAt", "Date"),
    ]
}

pub struct DashboardPage {
    context: PageContext,
}

impl DashboardPage {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    /// 統計と直近の取引を並行して取得
    pub async fn load(&self) -> DashboardView {
        let services = &self.context.services;
        let recent_page = PageRequest::first(RECENT_LIMIT);

        let no_params = QueryParams::new();
        let recent_params = QueryParams::with_page(recent_page);

        let (charge_stats, webhook_stats, recent) = tokio::join!(
            self.context
                .cached("/v1/charges/statistics", &no_params, || services.charges.statistics()),
            self.context
                .cached("/v1/webhooks/statistics", &no_params, || services.webhooks.statistics()),
            self.context.cached("/v1/charges/recent", &recent_params, || {
                services.charges.list_recent(recent_page)
            }),
        );

        DashboardView {
            charge_stats: charge_stats.into(),
            webhook_stats: webhook_stats.into(),
            recent: recent.into(),
        }
    }
}
