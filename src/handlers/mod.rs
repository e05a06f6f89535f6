pub mod gps;
pub mod page;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::store::SharedStore;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route(
            "/api/gps",
            get(gps::list_coordinates)
                .post(gps::report_coordinate)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/api/gps/clear", post(gps::clear_coordinates))
        .route("/ping", get(gps::ping))
        // logging so we can see whats going on
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(store)
}
