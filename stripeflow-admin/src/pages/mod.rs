// src/pages/mod.rs

//! 各画面の読み込みと描画
//!
//! 取得の失敗はAPIクライアントが通知済みなので、画面側は該当部分に
//! 失敗した旨だけを描画する（読み込み中の表示とは区別する）。
//! 更新系操作の後は関連するキャッシュを破棄する。

pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod transactions;
pub mod webhooks;

use std::future::Future;
use std::sync::Arc;

use crate::api::{ApiClient, Notification, Notifier};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::runtime::QueryCache;
use crate::service::Services;
use crate::types::{Page, PageRequest, QueryParams};
use crate::ui::DataTable;

pub use analytics::{AnalyticsPage, AnalyticsView};
pub use customers::{CustomerDetail, CustomersPage};
pub use dashboard::{DashboardPage, DashboardView};
pub use transactions::{TransactionsPage, TransactionsQuery};
pub use webhooks::{EventFilter, WebhooksPage, WebhooksView};

/// 画面の一部分の読み込み状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    /// 利用者向けのエラーメッセージ
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> From<AppResult<T>> for Loadable<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.user_message()),
        }
    }
}

/// 画面が共有する依存関係
#[derive(Clone)]
pub struct PageContext {
    pub services: Services,
    pub cache: QueryCache,
    notifier: Arc<dyn Notifier>,
    page_size: u32,
}

impl PageContext {
    pub fn new(client: Arc<ApiClient>, config: &AppConfig) -> Self {
        let notifier = client.notifier().clone();
        Self {
            services: Services::new(client),
            cache: QueryCache::new(config.refresh.stale_time),
            notifier,
            page_size: config.default_page_size,
        }
    }

    pub fn page_request(&self, page: u32) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::success(message));
    }

    async fn cached<T, F, Fut>(&self, path: &str, params: &QueryParams, fetch: F) -> AppResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        self.cache
            .get_or_fetch(&QueryCache::key(path, params), fetch)
            .await
    }
}

/// 区切り付きのセクション見出し
pub(crate) fn section(title: &str, body: &str) -> String {
    format!("== {} ==\n{}", title, body)
}

pub(crate) fn failed_message(message: &str) -> String {
    format!("Failed to load: {}", message)
}

/// 読み込み状態に応じて表の本体を決める（失敗時は行なしでメッセージのみ）
pub(crate) fn table_for<T>(table: DataTable<T>, state: &Loadable<Page<T>>) -> DataTable<T>
where
    T: Clone + serde::Serialize,
{
    match state {
        Loadable::Loading => table.with_loading(true),
        Loadable::Loaded(page) => table.with_rows(page.content.clone()),
        Loadable::Failed(message) => table.with_empty_message(failed_message(message)),
    }
}

/// 一覧の下に付けるページ要約（読み込めた場合のみ）
pub(crate) fn with_summary<T>(body: String, state: &Loadable<Page<T>>) -> String {
    match state.loaded() {
        Some(page) => format!("{}\n\n{}", body, page.summary()),
        None => body,
    }
}
