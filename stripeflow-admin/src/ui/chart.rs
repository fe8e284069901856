// src/ui/chart.rs

//! 横向きのテキスト棒グラフ

const DEFAULT_WIDTH: usize = 30;
const BAR: char = '█';

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    entries: Vec<(String, f64)>,
    width: usize,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// 負の値は0として扱う
    pub fn entry(mut self, label: impl Into<String>, value: f64) -> Self {
        self.entries.push((label.into(), value.max(0.0)));
        self
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// 最大値を全幅としたときの棒の長さ
    pub fn bar_lengths(&self) -> Vec<usize> {
        let max = self.entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        self.entries
            .iter()
            .map(|(_, value)| {
                if max <= 0.0 {
                    0
                } else {
                    ((value / max) * self.width as f64).round() as usize
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let label_width = self
            .entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![self.title.clone()];
        if self.entries.is_empty() {
            lines.push("  (no data)".to_string());
            return lines.join("\n");
        }

        for ((label, value), length) in self.entries.iter().zip(self.bar_lengths()) {
            let pad = label_width - label.chars().count();
            lines.push(format!(
                "  {}{} | {} {}",
                label,
                " ".repeat(pad),
                BAR.to_string().repeat(length),
                format_value(*value)
            ));
        }
        lines.join("\n")
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
