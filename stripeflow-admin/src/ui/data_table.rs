// src/ui/data_table.rs

//! 汎用データテーブル
//!
//! 行は `Serialize` できる任意の型。列はキー（camelCase、`customer.name` のような
//! ドット区切り可）で行のフィールドを参照し、[`ColumnKind`] に従って描画する。

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::format::{format_currency, format_date_time};
use super::status_badge::StatusBadge;
use crate::types::datetime::parse_api_datetime;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
pub const SKELETON_ROWS: usize = 5;

const DEFAULT_CURRENCY: &str = "USD";
const MISSING: &str = "-";
const SKELETON_CELL: &str = "░░░░░░";

static NULL: Value = Value::Null;

/// カスタム描画関数（フィールド値と行全体を受け取る）
pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T) -> String + Send + Sync>;
pub type RowClickHandler<T> = Box<dyn Fn(&T) + Send + Sync>;

pub enum ColumnKind<T> {
    Text,
    /// 金額（最小通貨単位）。通貨コードは同じ行の `currency_key` から取る
    Currency { currency_key: String },
    Status,
    DateTime,
    Custom(CellRenderer<T>),
}

impl<T> Clone for ColumnKind<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Text => Self::Text,
            Self::Currency { currency_key } => Self::Currency {
                currency_key: currency_key.clone(),
            },
            Self::Status => Self::Status,
            Self::DateTime => Self::DateTime,
            Self::Custom(renderer) => Self::Custom(renderer.clone()),
        }
    }
}

impl<T> std::fmt::Debug for ColumnKind<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Currency { currency_key } => f
                .debug_struct("Currency")
                .field("currency_key", currency_key)
                .finish(),
            Self::Status => f.write_str("Status"),
            Self::DateTime => f.write_str("DateTime"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Column<T> {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind<T>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ColumnKind<T>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, ColumnKind::Text)
    }

    pub fn currency(
        key: impl Into<String>,
        label: impl Into<String>,
        currency_key: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            label,
            ColumnKind::Currency {
                currency_key: currency_key.into(),
            },
        )
    }

    pub fn status(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, ColumnKind::Status)
    }

    pub fn date_time(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, ColumnKind::DateTime)
    }

    pub fn custom<F>(key: impl Into<String>, label: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(&Value, &T) -> String + Send + Sync + 'static,
    {
        Self::new(key, label, ColumnKind::Custom(Arc::new(renderer)))
    }
}

/// 描画済みセル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge(StatusBadge),
}

impl Cell {
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Badge(badge) => badge.render(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading { skeleton_rows: usize },
    Empty { message: String },
    Rows(Vec<TableRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub body: TableBody,
    pub interactive: bool,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

pub struct DataTable<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    loading: bool,
    empty_message: String,
    on_row_click: Option<RowClickHandler<T>>,
}

impl<T: Serialize> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_row_click: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_interactive(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// 行クリック。ハンドラーがない、または範囲外なら何もしない
    pub fn click(&self, index: usize) -> bool {
        match (&self.on_row_click, self.rows.get(index)) {
            (Some(handler), Some(row)) => {
                handler(row);
                true
            }
            _ => false,
        }
    }

    pub fn view(&self) -> TableView {
        let headers = self.columns.iter().map(|c| c.label.clone()).collect();

        let body = if self.loading {
            TableBody::Loading {
                skeleton_rows: SKELETON_ROWS,
            }
        } else if self.rows.is_empty() {
            TableBody::Empty {
                message: self.empty_message.clone(),
            }
        } else {
            TableBody::Rows(self.rows.iter().map(|row| self.render_row(row)).collect())
        };

        TableView {
            headers,
            body,
            interactive: self.is_interactive(),
        }
    }

    fn render_row(&self, row: &T) -> TableRow {
        let value = serde_json::to_value(row).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to serialize table row");
            Value::Null
        });

        let cells = self
            .columns
            .iter()
            .map(|column| {
                let field = lookup(&value, &column.key);
                match &column.kind {
                    ColumnKind::Text => Cell::Text(value_text(field)),
                    ColumnKind::Currency { currency_key } => {
                        let currency = lookup(&value, currency_key)
                            .as_str()
                            .unwrap_or(DEFAULT_CURRENCY);
                        match field.as_i64() {
                            Some(amount) => Cell::Text(format_currency(amount, currency)),
                            None => Cell::Text(value_text(field)),
                        }
                    }
                    ColumnKind::Status => Cell::Badge(StatusBadge::new(value_text(field))),
                    ColumnKind::DateTime => Cell::Text(
                        field
                            .as_str()
                            .and_then(parse_api_datetime)
                            .map_or_else(|| value_text(field), |dt| format_date_time(&dt)),
                    ),
                    ColumnKind::Custom(renderer) => Cell::Text(renderer(field, row)),
                }
            })
            .collect();

        TableRow { cells }
    }

    /// 列幅を揃えたテキスト表
    pub fn render_text(&self) -> String {
        render_view(&self.view())
    }
}

pub fn render_view(view: &TableView) -> String {
    let body_rows: Vec<Vec<String>> = match &view.body {
        TableBody::Loading { skeleton_rows } => (0..*skeleton_rows)
            .map(|_| vec![SKELETON_CELL.to_string(); view.headers.len()])
            .collect(),
        TableBody::Empty { .. } => Vec::new(),
        TableBody::Rows(rows) => rows
            .iter()
            .map(|row| row.cells.iter().map(Cell::text).collect())
            .collect(),
    };

    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.chars().count()).collect();
    for row in &body_rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = vec![join_cells(&view.headers, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    match &view.body {
        TableBody::Empty { message } => lines.push(message.clone()),
        _ => lines.extend(body_rows.iter().map(|row| join_cells(row, &widths))),
    }

    lines.join("\n")
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn lookup<'a>(value: &'a Value, key: &str) -> &'a Value {
    key.split('.')
        .try_fold(value, |current, part| current.get(part))
        .unwrap_or(&NULL)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
