//! Rule table HTTP handler.

use std::time::Instant;

use axum::Json;
use uuid::Uuid;

use patter_core::rules::rules;
use patter_types::rule::Rule;

use crate::http::response::ApiResponse;

/// GET /api/v1/rules - The rule table in evaluation order, fallback last.
pub async fn list_rules() -> Json<ApiResponse<Vec<&'static Rule>>> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let all = rules();

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(all, request_id, elapsed).with_link("self", "/api/v1/rules");

    Json(resp)
}
