// src/utils/validation.rs

pub mod common;

pub use common::{validate_currency, validate_not_empty_or_whitespace, SUPPORTED_CURRENCIES};
