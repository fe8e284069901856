// src/runtime/mod.rs

pub mod cache;
pub mod refresh;

pub use cache::QueryCache;
pub use refresh::AutoRefresh;
