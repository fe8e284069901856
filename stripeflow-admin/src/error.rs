// src/error.rs

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

/// フィールド名 → エラーメッセージ一覧
pub type FieldErrors = HashMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential storage error: {0}")]
    Storage(String),
}

/// エラー分類（通知やログレベルの判定に使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    InvalidRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Validation,
    Server,
    Unexpected,
    Decode,
    Config,
    Storage,
}

impl ApiError {
    /// HTTPステータスとサーバーのエラーボディから分類済みエラーを生成
    pub fn from_status(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        let message = body
            .message
            .clone()
            .or_else(|| body.error.clone())
            .unwrap_or_else(|| default_message(status.as_u16()).to_string());

        match status.as_u16() {
            400 if !body.errors.is_empty() => Self::Validation {
                message,
                field_errors: body.field_errors(),
            },
            400 => Self::InvalidRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::Validation {
                message,
                field_errors: body.field_errors(),
            },
            500 => Self::Server(message),
            code => Self::Unexpected {
                status: code,
                message,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Server(_) => ErrorKind::Server,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Config(_) => ErrorKind::Config,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// 対応するHTTPステータス（ネットワークエラー等はNone）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Validation { .. } => Some(422),
            Self::Server(_) => Some(500),
            Self::Unexpected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// ユーザーに表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to reach the server. Check your connection.".to_string(),
            Self::InvalidRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Server(message) => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Unexpected { message, .. } => message.clone(),
            Self::Decode(_) => "The server returned an unexpected response".to_string(),
            Self::Config(message) | Self::Storage(message) => message.clone(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request",
        401 => "Your session has expired. Please log in again.",
        403 => "You do not have permission to perform this action",
        404 => "The requested resource was not found",
        409 => "The request conflicts with the current state of the resource",
        422 => "Validation failed",
        500 => "An internal server error occurred",
        _ => "An unexpected error occurred",
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// クライアント側バリデーションもサーバーの422と同じ形に揃える
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors: FieldErrors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ApiError::Validation {
            message: "Validation failed".to_string(),
            field_errors,
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, ApiError>;

/// サーバーが返すエラーボディ
///
/// `errors` はフィールド名 → メッセージ（単一または配列）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub errors: HashMap<String, FieldMessages>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    pub fn field_errors(&self) -> FieldErrors {
        self.errors
            .iter()
            .map(|(field, messages)| {
                let messages = match messages {
                    FieldMessages::One(message) => vec![message.clone()],
                    FieldMessages::Many(messages) => messages.clone(),
                };
                (field.clone(), messages)
            })
            .collect()
    }
}
