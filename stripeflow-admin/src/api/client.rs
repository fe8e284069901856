// src/api/client.rs

//! StripeFlow APIへのHTTP出口
//!
//! すべてのリクエストはここを通る。資格情報ヘッダーの付与、リクエストIDの採番、
//! エラーの分類と通知を一箇所で行い、分類済みのエラーは必ず呼び出し元へ返す。

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use super::notify::{Navigator, Notification, Notifier, Route};
use crate::config::AppConfig;
use crate::error::{ApiError, AppResult, ErrorBody};
use crate::logging::RequestContext;
use crate::session::Session;
use crate::types::{Page, PageRequest, QueryParams};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &AppConfig,
        session: Session,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.api.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.api.base_url, "API client initialized");

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session,
            notifier,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> AppResult<T> {
        self.execute(Method::GET, path, params, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.encode(body)?;
        self.execute(Method::POST, path, &QueryParams::new(), Some(body))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.encode(body)?;
        self.execute(Method::PUT, path, &QueryParams::new(), Some(body))
            .await
    }

    /// ボディなしのPUT（`/cancel`, `/toggle?enabled=` などの操作系）
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> AppResult<T> {
        self.execute(Method::PUT, path, params, None).await
    }

    /// 204（空ボディ）は `()` などnullから作れる型で受ける
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(Method::DELETE, path, &QueryParams::new(), None)
            .await
    }

    /// ページ指定付きGET（page/sizeは追加パラメータより優先）
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        page: PageRequest,
        params: &QueryParams,
    ) -> AppResult<Page<T>> {
        let params = params.clone().merge(&QueryParams::with_page(page));
        self.get(path, &params).await
    }

    fn encode<B: Serialize + ?Sized>(&self, body: &B) -> AppResult<serde_json::Value> {
        serde_json::to_value(body).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to encode request body: {}", e))
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<serde_json::Value>,
    ) -> AppResult<T> {
        let context = RequestContext::new(method.as_str(), path);
        context.log_started();
        let start = Instant::now();

        let mut request = self
            .http
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, &context.request_id)
            .header(reqwest::header::ACCEPT, "application/json");

        // 資格情報がなければ匿名のまま送る
        if let Some(credential) = self.session.credential() {
            let (name, value) = credential.header();
            request = request.header(name, value);
        }
        if !params.is_empty() {
            request = request.query(params.pairs());
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                context.log_transport_failure(&err.to_string(), start.elapsed());
                return Err(self.fail(ApiError::from(err)));
            }
        };

        let status = response.status();
        context.log_completed(status.as_u16(), start.elapsed());

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Err(self.fail(ApiError::from(err))),
        };

        if !status.is_success() {
            let error_body = serde_json::from_slice::<ErrorBody>(&bytes).ok();
            return Err(self.fail(ApiError::from_status(status, error_body)));
        }

        let payload: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(payload).map_err(|err| {
            tracing::error!(
                request_id = %context.request_id,
                path = %context.path,
                error = %err,
                "Failed to decode response body"
            );
            self.fail(ApiError::from(err))
        })
    }

    /// 失敗1件につき1回だけ通知し、エラーはそのまま返す
    fn fail(&self, error: ApiError) -> ApiError {
        if matches!(error, ApiError::Unauthorized(_)) {
            if let Err(storage_err) = self.session.logout() {
                tracing::warn!(error = %storage_err, "Failed to clear stored credential");
            }
            self.navigator.navigate(Route::Login);
        }

        self.notifier
            .notify(Notification::error(error.user_message()));
        error
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}
