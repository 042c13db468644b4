use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use super::handlers::{evaluate_handler, index_handler, question_handler};
use super::request_log::request_log_middleware;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/question", get(question_handler))
        .route("/api/evaluate", post(evaluate_handler))
        .layer(middleware::from_fn(request_log_middleware))
        .with_state(state)
}
