// src/api/mod.rs

pub mod client;
pub mod dto;
pub mod notify;

pub use client::ApiClient;
pub use notify::{Navigator, Notification, NotificationLevel, Notifier, Route};
