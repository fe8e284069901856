// src/cli.rs

//! コマンドライン引数の解釈と画面の描画

use crate::api::Route;
use crate::domain::{ChargeFilters, ChargeStatus, WebhookEventStatus};
use crate::error::{ApiError, AppResult};
use crate::pages::{
    AnalyticsPage, CustomersPage, DashboardPage, EventFilter, Loadable, PageContext,
    TransactionsPage, TransactionsQuery, WebhooksPage,
};
use crate::types::PageRequest;

pub const USAGE: &str = "\
Usage:
  stripeflow-admin <dashboard|transactions|customers|webhooks|analytics> [options]
  stripeflow-admin login <token> [--api-key]
  stripeflow-admin logout

Options:
  --page N        page number (starts at 0)
  --size N        page size (1-100)
  --status S      filter by status (transactions, webhooks)
  --currency C    filter by currency (transactions)
  --customer ID   filter by customer (transactions)
  --search Q      search by name (customers)
  --id ID         show one customer with recent transactions (customers)
  --endpoint ID   show events for one endpoint (webhooks)
  --watch         refresh periodically until Ctrl+C";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(ViewOptions),
    Login { token: String, api_key: bool },
    Logout,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub route: Route,
    pub page: u32,
    pub size: Option<u32>,
    pub status: Option<String>,
    pub currency: Option<String>,
    pub customer_id: Option<i64>,
    pub search: Option<String>,
    pub detail_id: Option<i64>,
    pub endpoint_id: Option<i64>,
    pub watch: bool,
}

impl ViewOptions {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            page: 0,
            size: None,
            status: None,
            currency: None,
            customer_id: None,
            search: None,
            detail_id: None,
            endpoint_id: None,
            watch: false,
        }
    }

    pub fn page_request(&self, context: &PageContext) -> PageRequest {
        match self.size {
            Some(size) => PageRequest::new(self.page, size),
            None => context.page_request(self.page),
        }
    }

    pub fn charge_filters(&self) -> ChargeFilters {
        ChargeFilters {
            status: self.status.as_deref().map(ChargeStatus::parse),
            currency: self.currency.as_ref().map(|c| c.to_uppercase()),
            customer_id: self.customer_id,
            ..Default::default()
        }
    }

    pub fn event_filter(&self) -> EventFilter {
        if let Some(id) = self.endpoint_id {
            return EventFilter::Endpoint(id);
        }
        match self.status.as_deref().map(WebhookEventStatus::parse) {
            Some(WebhookEventStatus::Failed) => EventFilter::Failed,
            Some(status) => EventFilter::Status(status),
            None => EventFilter::Recent,
        }
    }
}

impl Command {
    /// プログラム名を除いた引数から解釈する
    pub fn parse(args: &[String]) -> AppResult<Self> {
        let Some((first, rest)) = args.split_first() else {
            return Ok(Self::View(ViewOptions::new(Route::Dashboard)));
        };

        match first.as_str() {
            "-h" | "--help" | "help" => Ok(Self::Help),
            "logout" => Ok(Self::Logout),
            "login" => {
                let token = rest
                    .iter()
                    .find(|arg| !arg.starts_with("--"))
                    .ok_or_else(|| invalid("login requires a token"))?;
                Ok(Self::Login {
                    token: token.clone(),
                    api_key: rest.iter().any(|arg| arg == "--api-key"),
                })
            }
            name => {
                let route = Route::parse(name)
                    .filter(|route| *route != Route::Login)
                    .ok_or_else(|| invalid(&format!("Unknown command: {}", name)))?;
                parse_view_options(route, rest).map(Self::View)
            }
        }
    }
}

fn parse_view_options(route: Route, args: &[String]) -> AppResult<ViewOptions> {
    let mut options = ViewOptions::new(route);
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        if flag == "--watch" {
            options.watch = true;
            continue;
        }

        let value = iter
            .next()
            .ok_or_else(|| invalid(&format!("{} requires a value", flag)))?;
        match flag.as_str() {
            "--page" => options.page = parse_number(flag, value)?,
            "--size" => options.size = Some(parse_number(flag, value)?),
            "--status" => options.status = Some(value.clone()),
            "--currency" => options.currency = Some(value.clone()),
            "--customer" => options.customer_id = Some(parse_number(flag, value)?),
            "--search" => options.search = Some(value.clone()),
            "--id" => options.detail_id = Some(parse_number(flag, value)?),
            "--endpoint" => options.endpoint_id = Some(parse_number(flag, value)?),
            _ => return Err(invalid(&format!("Unknown option: {}", flag))),
        }
    }

    Ok(options)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> AppResult<T> {
    value
        .parse()
        .map_err(|_| invalid(&format!("{} expects a number, got '{}'", flag, value)))
}

fn invalid(message: &str) -> ApiError {
    ApiError::InvalidRequest(message.to_string())
}

/// 指定された画面を1回読み込んで描画する
pub async fn render_view(context: &PageContext, options: &ViewOptions) -> String {
    let page = options.page_request(context);

    match options.route {
        Route::Dashboard | Route::Login => DashboardPage::new(context.clone()).load().await.render(),
        Route::Transactions => {
            let query = TransactionsQuery {
                page,
                filters: options.charge_filters(),
            };
            let charges = Loadable::from(TransactionsPage::new(context.clone()).load(&query).await);
            TransactionsPage::render(&query, &charges)
        }
        Route::Customers => {
            let customers_page = CustomersPage::new(context.clone());
            if let Some(id) = options.detail_id {
                return customers_page.detail(id).await.render();
            }
            let search = options.search.as_deref();
            let customers = Loadable::from(customers_page.load(page, search).await);
            CustomersPage::render(&customers, search)
        }
        Route::Webhooks => WebhooksPage::new(context.clone())
            .load(page, options.event_filter())
            .await
            .render(),
        Route::Analytics => AnalyticsPage::new(context.clone()).load().await.render(),
    }
}
