// src/lib.rs
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pages;
pub mod runtime;
pub mod service;
pub mod session;
pub mod types;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::AppConfig;
pub use error::{ApiError, AppResult};
pub use session::Session;
