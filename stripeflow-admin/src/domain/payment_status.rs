// src/domain/payment_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// 既知の値はenumに、未知の値は `Other` に保持する（バックエンドが値を増やしても読める）
macro_rules! api_status {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal / $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// ワイヤ表現（大文字スネークケース）
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            pub fn display_name(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// すべての既知のステータス
            pub fn all() -> Vec<Self> {
                vec![$(Self::$variant,)+]
            }

            pub fn parse(value: &str) -> Self {
                match value.trim().to_uppercase().as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                status.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

api_status! {
    /// 課金の状態
    ChargeStatus {
        Pending => "PENDING" / "Pending",
        Processing => "PROCESSING" / "Processing",
        Succeeded => "SUCCEEDED" / "Succeeded",
        Failed => "FAILED" / "Failed",
        Canceled => "CANCELED" / "Canceled",
    }
}

impl ChargeStatus {
    /// キャンセル可能な状態か
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

api_status! {
    /// Webhook配信イベントの状態
    WebhookEventStatus {
        Pending => "PENDING" / "Pending",
        Delivered => "DELIVERED" / "Delivered",
        Failed => "FAILED" / "Failed",
        Retrying => "RETRYING" / "Retrying",
        Canceled => "CANCELED" / "Canceled",
    }
}

impl WebhookEventStatus {
    /// 手動リトライを受け付ける状態か
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed | Self::Retrying)
    }
}

api_status! {
    /// 返金の状態
    RefundStatus {
        Pending => "PENDING" / "Pending",
        Succeeded => "SUCCEEDED" / "Succeeded",
        Failed => "FAILED" / "Failed",
        Canceled => "CANCELED" / "Canceled",
    }
}
