// src/api/notify.rs

//! ユーザー向け通知（トースト）と画面遷移の出口
//!
//! APIクライアントは失敗1件につき通知を1回だけ送る。401の場合は
//! 資格情報を消したうえで [`Route::Login`] へ遷移させる。

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 画面（ルート）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Transactions,
    Customers,
    Webhooks,
    Analytics,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Transactions => "/transactions",
            Self::Customers => "/customers",
            Self::Webhooks => "/webhooks",
            Self::Analytics => "/analytics",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_start_matches('/').to_lowercase().as_str() {
            "login" => Some(Self::Login),
            "" | "dashboard" => Some(Self::Dashboard),
            "transactions" | "charges" => Some(Self::Transactions),
            "customers" => Some(Self::Customers),
            "webhooks" => Some(Self::Webhooks),
            "analytics" => Some(Self::Analytics),
            _ => None,
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// 通知をトレーシングに流す（ヘッドレス実行用）
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::error!(message = %notification.message, "notification"),
            NotificationLevel::Warning => tracing::warn!(message = %notification.message, "notification"),
            _ => tracing::info!(message = %notification.message, "notification"),
        }
    }
}

/// 通知を標準エラーに表示する（CLI用）
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", notification);
    }
}

/// 受け取った通知を保持する
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().map_or(0, |guard| guard.len())
    }

    /// 溜まった通知を取り出して空にする
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut guard) = self.notifications.lock() {
            guard.push(notification);
        }
    }
}

/// 現在のルートと遷移履歴を保持する
#[derive(Debug)]
pub struct RouteState {
    history: Mutex<Vec<Route>>,
}

impl RouteState {
    pub fn new(initial: Route) -> Self {
        Self {
            history: Mutex::new(vec![initial]),
        }
    }

    pub fn current(&self) -> Route {
        self.history
            .lock()
            .ok()
            .and_then(|guard| guard.last().copied())
            .unwrap_or(Route::Dashboard)
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

impl Navigator for RouteState {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        if let Ok(mut guard) = self.history.lock() {
            if guard.last() != Some(&route) {
                guard.push(route);
            }
        }
    }
}
