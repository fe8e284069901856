// src/ui/status_badge.rs

//! ステータス文字列の色分けバッジ

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// テキスト表示用のマーカー
    pub fn marker(&self) -> char {
        match self {
            Self::Default => ' ',
            Self::Success => '+',
            Self::Warning => '~',
            Self::Error => '!',
            Self::Info => 'i',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    /// ラベル左右の余白（文字数）
    pub fn padding(&self) -> usize {
        match self {
            Self::Sm => 0,
            Self::Md => 1,
            Self::Lg => 2,
        }
    }
}

// 上から順に評価する。inactive/disabled を active/enabled より先に判定すること
const RULES: &[(BadgeVariant, &[&str])] = &[
    (BadgeVariant::Success, &["success", "succeeded", "delivered"]),
    (BadgeVariant::Warning, &["pending", "processing", "retrying"]),
    (
        BadgeVariant::Error,
        &["failed", "error", "cancel", "inactive", "disabled"],
    ),
    (BadgeVariant::Success, &["active", "enabled"]),
];

/// ステータス文字列を大文字小文字を区別せず部分一致で分類
pub fn classify(status: &str) -> BadgeVariant {
    let lower = status.to_lowercase();
    RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| lower.contains(needle)))
        .map_or(BadgeVariant::Default, |(variant, _)| *variant)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
}

impl StatusBadge {
    pub fn new(status: impl Into<String>) -> Self {
        let label = status.into();
        let variant = classify(&label);
        Self {
            label,
            variant,
            size: BadgeSize::default(),
        }
    }

    /// 明示的な指定は分類結果より優先する
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn render(&self) -> String {
        let pad = " ".repeat(self.size.padding());
        format!("[{}{}{}{}]", self.variant.marker(), pad, self.label, pad)
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
