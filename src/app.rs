use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/signatures",
            get(handlers::get_counts).post(handlers::submit_signature),
        )
        .route("/api/board", get(handlers::board_page))
        .route("/api/visitors", post(handlers::visitor_tick))
        .route("/api/send-message", post(handlers::send_message))
        .with_state(state)
}
