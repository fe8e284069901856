// src/ui/mod.rs

pub mod chart;
pub mod data_table;
pub mod form;
pub mod format;
pub mod stats_card;
pub mod status_badge;

pub use chart::BarChart;
pub use data_table::{Cell, Column, ColumnKind, DataTable, TableBody, TableView};
pub use form::FormState;
pub use stats_card::{ChangeType, StatsCard};
pub use status_badge::{classify, BadgeSize, BadgeVariant, StatusBadge};
