//! Web API module
//!
//! Exposes the item store over a JSON HTTP API. Handlers decode the
//! request, call exactly one store operation, and map the outcome to a
//! status code and JSON body.

mod handlers;
mod response;
mod server;

pub use handlers::{AppState, DeleteResponse, StatsResponse};
pub use response::{ApiError, ApiResult, ErrorBody, JsonResponse};
pub use server::{router, router_with_body_limit, run_server};
