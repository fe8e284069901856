use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ApiError, AppResult};

/// 資格情報をどのヘッダーで送るか
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `X-API-Key: <key>`
    ApiKey,
}

impl AuthScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bearer" | "token" => Some(Self::Bearer),
            "api_key" | "api-key" | "apikey" => Some(Self::ApiKey),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct RefreshConfig {
    /// 自動更新の間隔
    pub interval: Duration,
    /// キャッシュを新鮮とみなす期間
    pub stale_time: Duration,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub api: ApiConfig,
    pub auth_scheme: AuthScheme,
    pub credential_file: PathBuf,
    pub refresh: RefreshConfig,
    pub default_page_size: u32,
}

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment =
            env::var("STRIPEFLOW_ENV").unwrap_or_else(|_| "development".to_string());

        let base_url = env::var("STRIPEFLOW_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "STRIPEFLOW_API_URL must be an http(s) URL, got {}",
                base_url
            )));
        }

        let auth_scheme = match env::var("STRIPEFLOW_AUTH_SCHEME") {
            Ok(value) => AuthScheme::parse(&value).ok_or_else(|| {
                ApiError::Config(format!("Invalid STRIPEFLOW_AUTH_SCHEME value: {}", value))
            })?,
            Err(_) => AuthScheme::Bearer,
        };

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url,
                timeout: Duration::from_secs(parse_env("STRIPEFLOW_API_TIMEOUT_SECS", 10)?),
            },
            auth_scheme,
            credential_file: env::var("STRIPEFLOW_CREDENTIAL_FILE")
                .map_or_else(|_| PathBuf::from(".stripeflow/credential.json"), PathBuf::from),
            refresh: RefreshConfig {
                interval: Duration::from_secs(parse_env("STRIPEFLOW_REFRESH_SECS", 30)?),
                stale_time: Duration::from_secs(parse_env("STRIPEFLOW_STALE_SECS", 10)?),
            },
            default_page_size: parse_env("STRIPEFLOW_PAGE_SIZE", 20)?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            environment: "test".to_string(),
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: Duration::from_secs(5),
            },
            auth_scheme: AuthScheme::Bearer,
            credential_file: env::temp_dir()
                .join(format!("stripeflow-credential-{}.json", uuid::Uuid::new_v4())),
            refresh: RefreshConfig {
                interval: Duration::from_millis(50),
                stale_time: Duration::from_secs(10),
            },
            default_page_size: 20,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ApiError::Config(format!("Invalid {} value: {}", key, value))),
        Err(_) => Ok(default),
    }
}
