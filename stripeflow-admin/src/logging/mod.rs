// src/logging/mod.rs

use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {}
        }
    };
}

/// トレーシングの設定（RUST_LOG が優先）
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stripeflow_admin=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

// リクエストコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
}

impl RequestContext {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    pub fn log_started(&self) {
        log_with_context!(
            tracing::Level::DEBUG,
            "Request started",
            "request_id" => &self.request_id,
            "method" => &self.method,
            "path" => &self.path,
        );
    }

    /// ステータスに応じたレベルで完了ログを出す
    pub fn log_completed(&self, status: u16, duration: Duration) {
        log_with_context!(
            if status >= 500 { tracing::Level::ERROR }
            else if status >= 400 { tracing::Level::WARN }
            else { tracing::Level::INFO },
            "Request completed",
            "request_id" => &self.request_id,
            "method" => &self.method,
            "path" => &self.path,
            "status" => status,
            "duration_ms" => duration.as_millis(),
        );
    }

    pub fn log_transport_failure(&self, error: &str, duration: Duration) {
        log_with_context!(
            tracing::Level::ERROR,
            "Request failed before a response was received",
            "request_id" => &self.request_id,
            "method" => &self.method,
            "path" => &self.path,
            "error" => error,
            "duration_ms" => duration.as_millis(),
        );
    }
}
