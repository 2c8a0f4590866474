//! itemdb - A small in-memory item store with a JSON HTTP API
//!
//! Modules are kept loosely coupled:
//! - `store` owns the items and their lock, with no knowledge of HTTP
//! - `web` translates HTTP requests into store calls
//! - `config` and `seed` cover process bootstrap

pub mod config;
pub mod seed;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::ServerConfig;
pub use store::{Item, ItemPayload, ItemStore, StoreError};
pub use web::{router, ApiError};
