use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::models::coordinate::{timestamp_now, CoordinateRecord};
use crate::models::status::StatusResponse;
use crate::store::SharedStore;

pub const CLEARED_MESSAGE: &str = "All markers have been cleared.";

pub async fn list_coordinates(State(store): State<SharedStore>) -> Json<Vec<CoordinateRecord>> {
    Json(store.snapshot())
}

/// Accepts a JSON report with `lat` and `lon`.
///
/// Bodies that are not JSON, or lack either coordinate, are dropped without
/// telling the caller: the reply is `{"status":"ok"}` either way. The route
/// has no body size limit, so oversized bodies get the same reply.
pub async fn report_coordinate(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Json<StatusResponse> {
    match serde_json::from_slice(&body) {
        Ok(report) => match CoordinateRecord::from_report(report, timestamp_now()) {
            Some(record) => {
                store.append(record);
                debug!(stored = store.len(), "Report accepted");
            }
            None => debug!("Ignoring report without numeric lat/lon"),
        },
        Err(e) => debug!("Ignoring unreadable report: {}", e),
    }
    Json(StatusResponse::ok())
}

pub async fn clear_coordinates(State(store): State<SharedStore>) -> Json<StatusResponse> {
    if store.is_empty() {
        debug!("Clear requested with no markers stored");
    }
    store.clear();
    Json(StatusResponse::ok_with_message(CLEARED_MESSAGE))
}

pub async fn ping() -> Json<StatusResponse> {
    Json(StatusResponse::alive())
}
