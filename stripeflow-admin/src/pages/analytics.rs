// src/pages/analytics.rs

use crate::domain::{ChargeStatistics, RefundStatistics, WebhookStatistics};
use crate::types::QueryParams;
use crate::ui::format::{format_count, format_currency, format_percent};
use crate::ui::{BarChart, StatsCard};

use super::{failed_message, section, Loadable, PageContext};

#[derive(Debug, Clone, Default)]
pub struct AnalyticsView {
    pub charges: Loadable<ChargeStatistics>,
    pub webhooks: Loadable<WebhookStatistics>,
    pub refunds: Loadable<RefundStatistics>,
}

impl AnalyticsView {
    /// 失敗した統計のメッセージ（重複は除く）
    fn failures(&self) -> Vec<&str> {
        let mut failures = Vec::new();
        for state in [
            failure(&self.charges),
            failure(&self.webhooks),
            failure(&self.refunds),
        ]
        .into_iter()
        .flatten()
        {
            if !failures.contains(&state) {
                failures.push(state);
            }
        }
        failures
    }

    pub fn cards(&self) -> Vec<StatsCard> {
        let mut cards = Vec::new();

        if let Some(stats) = self.charges.loaded() {
            cards.push(StatsCard::new(
                "Revenue",
                format_currency(stats.total_revenue.unwrap_or(0), "USD"),
            ));
            cards.push(StatsCard::new("Charge Success Rate", format_percent(stats.success_rate)));
        }
        if let Some(stats) = self.webhooks.loaded() {
            cards.push(StatsCard::new(
                "Active Endpoints",
                format!(
                    "{} / {}",
                    format_count(stats.enabled_endpoints),
                    format_count(stats.total_endpoints)
                ),
            ));
            cards.push(StatsCard::new(
                "Delivery Success Rate",
                format_percent(stats.delivery_success_rate),
            ));
        }
        if let Some(stats) = self.refunds.loaded() {
            cards.push(StatsCard::new("Refund Success Rate", format_percent(stats.success_rate)));
        }

        cards
    }

    pub fn charts(&self) -> Vec<BarChart> {
        let mut charts = Vec::new();

        if let Some(stats) = self.charges.loaded() {
            charts.push(
                BarChart::new("Charge Outcomes")
                    .entry("Succeeded", stats.successful_charges as f64)
                    .entry("Failed", stats.failed_charges as f64)
                    .entry("Other", stats.other_charges() as f64),
            );
        }
        if let Some(stats) = self.webhooks.loaded() {
            charts.push(
                BarChart::new("Webhook Deliveries")
                    .entry("Delivered", stats.delivered_events as f64)
                    .entry("Pending", stats.pending_events as f64)
                    .entry("Failed", stats.failed_events as f64),
            );
        }
        if let Some(stats) = self.refunds.loaded() {
            let other = stats
                .total_refunds
                .saturating_sub(stats.successful_refunds + stats.failed_refunds);
            charts.push(
                BarChart::new("Refund Outcomes")
                    .entry("Succeeded", stats.successful_refunds as f64)
                    .entry("Failed", stats.failed_refunds as f64)
                    .entry("Other", other as f64),
            );
        }

        charts
    }

    pub fn render(&self) -> String {
        let cards = self.cards();
        let mut lines: Vec<String> = cards.iter().map(StatsCard::render).collect();
        lines.extend(self.failures().into_iter().map(failed_message));
        if lines.is_empty() {
            return section("Analytics", "Loading statistics...");
        }

        let mut parts = vec![section("Analytics", &lines.join("\n"))];
        parts.extend(self.charts().iter().map(BarChart::render));
        parts.join("\n\n")
    }
}

fn failure<T>(state: &Loadable<T>) -> Option<&str> {
    match state {
        Loadable::Failed(message) => Some(message.as_str()),
        _ => None,
    }
}

pub struct AnalyticsPage {
    context: PageContext,
}

impl AnalyticsPage {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    pub async fn load(&self) -> AnalyticsView {
        let services = &self.context.services;
        let params = QueryParams::new();

        let (charges, webhooks, refunds) = tokio::join!(
            self.context
                .cached("/v1/charges/statistics", &params, || services.charges.statistics()),
            self.context
                .cached("/v1/webhooks/statistics", &params, || services.webhooks.statistics()),
            self.context
                .cached("/v1/refunds/statistics", &params, || services.refunds.statistics()),
        );

        AnalyticsView {
            charges: charges.into(),
            webhooks: webhooks.into(),
            refunds: refunds.into(),
        }
    }
}
