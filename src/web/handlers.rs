//! HTTP handlers for the item API

use axum::extract::{rejection::BytesRejection, Path, State};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use sysinfo::System;
use tracing::{debug, info, warn};

use super::response::{ApiError, ApiResult, JsonResponse};
use crate::store::{ItemPayload, ItemStore, StoreError};

/// Shared application state
pub type AppState = Arc<ItemStore>;

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
    pub id_deleted: String,
}

/// Service statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of stored items
    pub items: usize,
    /// Bytes held by item fields
    pub item_bytes: usize,
    /// Total system memory in MB
    pub total_memory_mb: f64,
    /// Memory in use system-wide in MB
    pub used_memory_mb: f64,
}

/// Decode a create/update body
///
/// The body is read as raw bytes so that a missing or odd `Content-Type`
/// still goes through the same decode path. A body that cannot be read at
/// all (over the size limit, aborted stream) is a bad payload too.
fn decode_payload(body: Result<Bytes, BytesRejection>) -> ApiResult<ItemPayload> {
    let body = body.map_err(|rejection| {
        warn!("Failed to read request body: {}", rejection);
        ApiError::InvalidPayload
    })?;

    ItemPayload::from_body(&body).map_err(|e| {
        warn!("Rejected item payload: {}", e);
        ApiError::InvalidPayload
    })
}

fn log_missing(err: &StoreError) {
    debug!("{}", err);
}

/// GET /items
pub async fn list_items(State(store): State<AppState>) -> ApiResult<JsonResponse> {
    JsonResponse::ok(&store.list())
}

/// GET /items/{id}
pub async fn get_item(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<JsonResponse> {
    let item = store.get(&id).inspect_err(log_missing)?;
    JsonResponse::ok(&item)
}

/// POST /items
pub async fn create_item(
    State(store): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<JsonResponse> {
    let payload = decode_payload(body)?;
    let item = store.insert(payload);
    info!("Created item {}", item.id);
    JsonResponse::created(&item)
}

/// PUT /items/{id}
pub async fn update_item(
    State(store): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<JsonResponse> {
    let payload = decode_payload(body)?;
    let item = store.update(&id, payload).inspect_err(log_missing)?;
    info!("Updated item {}", item.id);
    JsonResponse::ok(&item)
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<JsonResponse> {
    store.delete(&id).inspect_err(log_missing)?;
    info!("Deleted item {}", id);
    JsonResponse::ok(&DeleteResponse {
        result: "success",
        id_deleted: id,
    })
}

/// GET /stats
pub async fn stats_handler(State(store): State<AppState>) -> ApiResult<JsonResponse> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total_mem_bytes = sys.total_memory();
    let used_mem_bytes = total_mem_bytes.saturating_sub(sys.available_memory());

    let store_stats = store.stats();

    JsonResponse::ok(&StatsResponse {
        items: store_stats.items,
        item_bytes: store_stats.item_bytes,
        total_memory_mb: total_mem_bytes as f64 / 1024.0 / 1024.0,
        used_memory_mb: used_mem_bytes as f64 / 1024.0 / 1024.0,
    })
}
