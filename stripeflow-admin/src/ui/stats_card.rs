// src/ui/stats_card.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeType {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl ChangeType {
    /// 増減値の符号から判定
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Positive
        } else if delta < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
            Self::Neutral => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub change_type: ChangeType,
    pub loading: bool,
}

impl StatsCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            change_type: ChangeType::Neutral,
            loading: false,
        }
    }

    /// 読み込み中のプレースホルダー
    pub fn loading(title: impl Into<String>) -> Self {
        Self {
            loading: true,
            ..Self::new(title, "")
        }
    }

    /// 取得に失敗した統計の表示
    pub fn unavailable(title: impl Into<String>) -> Self {
        Self::new(title, "n/a")
    }

    pub fn with_change(mut self, change: impl Into<String>, change_type: ChangeType) -> Self {
        self.change = Some(change.into());
        self.change_type = change_type;
        self
    }

    pub fn render(&self) -> String {
        if self.loading {
            return format!("{}\n  ░░░░░░░░", self.title);
        }
        match &self.change {
            Some(change) => format!(
                "{}\n  {}  {} {}",
                self.title,
                self.value,
                self.change_type.arrow(),
                change
            ),
            None => format!("{}\n  {}", self.title, self.value),
        }
    }
}

impl fmt::Display for StatsCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// カードを横に並べずに縦に連結する
pub fn render_cards(cards: &[StatsCard]) -> String {
    cards
        .iter()
        .map(StatsCard::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
