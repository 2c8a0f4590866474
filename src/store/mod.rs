//! In-memory storage module
//!
//! Owns the item collection and the lock that serializes access to it.
//! This module knows nothing about HTTP (loose coupling): handlers only
//! see cloned `Item`s and `StoreError`s.

mod error;
mod item;
mod memory;

pub use error::{StoreError, StoreResult};
pub use item::{Item, ItemPayload};
pub use memory::{ItemStore, StoreStats};
