// src/pages/customers.rs

use crate::api::dto::CreateCustomerRequest;
use crate::domain::{Charge, Customer};
use crate::error::AppResult;
use crate::types::{Page, PageRequest, QueryParams};
use crate::ui::format::{format_count, format_currency, format_date};
use crate::ui::{Column, DataTable, FormState};

use super::transactions::charge_columns;
use super::{failed_message, section, table_for, with_summary, Loadable, PageContext};

const CUSTOMERS_PATH: &str = "/v1/customers";
/// 顧客詳細に出す直近の取引件数
const DETAIL_CHARGES_LIMIT: u32 = 10;

pub fn customer_columns() -> Vec<Column<Customer>> {
    vec![
        Column::text("id", "ID"),
        Column::text("name", "Name"),
        Column::text("email", "Email"),
        Column::text("phone", "Phone"),
        Column::custom("totalSpent", "Total Spent", |_, customer: &Customer| {
            format_currency(customer.total_spent, "USD")
        }),
        Column::custom("totalTransactions", "Transactions", |_, customer: &Customer| {
            format_count(customer.total_transactions)
        }),
        Column::date_time("createdAt", "Created"),
    ]
}

/// 顧客詳細（顧客本体と直近の取引は別々に読み込む）
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetail {
    pub id: i64,
    pub customer: Loadable<Customer>,
    pub charges: Loadable<Page<Charge>>,
}

impl CustomerDetail {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            customer: Loadable::Loading,
            charges: Loadable::Loading,
        }
    }

    pub fn charges_table(&self) -> DataTable<Charge> {
        let table = DataTable::new(charge_columns()).with_empty_message("No transactions yet");
        table_for(table, &self.charges)
    }

    pub fn render(&self) -> String {
        let title = format!("Customer #{}", self.id);
        let customer = match &self.customer {
            Loadable::Loading => return section(&title, "Loading..."),
            Loadable::Failed(message) => {
                return section(
                    &title,
                    &format!("Customer not found\n{}", failed_message(message)),
                )
            }
            Loadable::Loaded(customer) => customer,
        };

        let address = customer
            .address
            .as_ref()
            .map(|address| address.one_line())
            .filter(|line| !line.is_empty())
            .unwrap_or_else(|| "No address on file".to_string());
        let info = [
            format!("Name:          {}", customer.name),
            format!("Email:         {}", customer.email),
            format!(
                "Phone:         {}",
                customer.phone.as_deref().unwrap_or("Not provided")
            ),
            format!("Address:       {}", address),
            format!("Total Spent:   {}", format_currency(customer.total_spent, "USD")),
            format!("Transactions:  {}", format_count(customer.total_transactions)),
            format!("Created:       {}", format_date(&customer.created_at)),
            format!("Last Updated:  {}", format_date(&customer.updated_at)),
        ]
        .join("\n");

        let charges = with_summary(self.charges_table().render_text(), &self.charges);
        [
            section(&format!("{} {}", title, customer.name), &info),
            section("Recent Transactions", &charges),
        ]
        .join("\n\n")
    }
}

pub struct CustomersPage {
    context: PageContext,
}

impl CustomersPage {
    pub fn new(context: PageContext) -> Self {
        Self { context }
    }

    /// 検索語があれば検索APIを使う
    pub async fn load(&self, page: PageRequest, search: Option<&str>) -> AppResult<Page<Customer>> {
        let customers = &self.context.services.customers;
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let params = QueryParams::with_page(page).set_opt("name", search);

        match search {
            Some(name) => {
                self.context
                    .cached(&format!("{}/search", CUSTOMERS_PATH), &params, || {
                        customers.search_customers(name, page)
                    })
                    .await
            }
            None => {
                self.context
                    .cached(CUSTOMERS_PATH, &params, || customers.list_customers(page, None))
                    .await
            }
        }
    }

    /// 顧客本体と直近の取引を並行して取得
    pub async fn detail(&self, id: i64) -> CustomerDetail {
        let services = &self.context.services;
        let charges_page = PageRequest::first(DETAIL_CHARGES_LIMIT);

        let customer_path = format!("{}/{}", CUSTOMERS_PATH, id);
        let charges_path = format!("/v1/charges/customer/{}", id);
        let no_params = QueryParams::new();
        let charges_params = QueryParams::with_page(charges_page);

        let (customer, charges) = tokio::join!(
            self.context
                .cached(&customer_path, &no_params, || services.customers.get_customer(id)),
            self.context.cached(&charges_path, &charges_params, || {
                services.charges.list_by_customer(id, charges_page)
            }),
        );

        CustomerDetail {
            id,
            customer: customer.into(),
            charges: charges.into(),
        }
    }

    pub async fn create(
        &self,
        form: &mut FormState,
        request: &CreateCustomerRequest,
    ) -> Option<Customer> {
        form.begin_submit();
        let result = self.context.services.customers.create_customer(request).await;
        let customer = form.finish(result)?;

        self.context.cache.invalidate(CUSTOMERS_PATH).await;
        self.context
            .notify_success(format!("Customer {} created", customer.name));
        Some(customer)
    }

    pub async fn update(
        &self,
        form: &mut FormState,
        id: i64,
        request: &CreateCustomerRequest,
    ) -> Option<Customer> {
        form.begin_submit();
        let result = self
            .context
            .services
            .customers
            .update_customer(id, request)
            .await;
        let customer = form.finish(result)?;

        self.context.cache.invalidate(CUSTOMERS_PATH).await;
        self.context
            .notify_success(format!("Customer {} updated", customer.name));
        Some(customer)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.context.services.customers.delete_customer(id).await?;
        self.context.cache.invalidate(CUSTOMERS_PATH).await;
        self.context
            .notify_success(format!("Customer #{} deleted", id));
        Ok(())
    }

    pub fn table(state: &Loadable<Page<Customer>>, search: Option<&str>) -> DataTable<Customer> {
        let empty_message = match search {
            Some(query) if !query.trim().is_empty() => {
                format!("No customers match \"{}\"", query.trim())
            }
            _ => "No customers yet".to_string(),
        };
        let table = DataTable::new(customer_columns()).with_empty_message(empty_message);
        table_for(table, state)
    }

    /// 行クリックで顧客IDを渡す一覧（詳細表示への遷移用）
    pub fn selectable_table<F>(
        state: &Loadable<Page<Customer>>,
        search: Option<&str>,
        on_select: F,
    ) -> DataTable<Customer>
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        Self::table(state, search).on_row_click(move |customer: &Customer| on_select(customer.id))
    }

    pub fn render(state: &Loadable<Page<Customer>>, search: Option<&str>) -> String {
        let body = with_summary(Self::table(state, search).render_text(), state);
        section("Customers", &body)
    }
}
