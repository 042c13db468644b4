//! Request handlers.
//!
//! None of these return an error status for data-source or upstream
//! failures: the question bank answers with a sentinel record and the
//! evaluator with its fallback payload. A body that is not a valid
//! `EvaluationRequest` is rejected with a JSON `{"error": ...}` body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::evaluate::{Evaluation, EvaluationRequest};
use crate::questions::QuestionRecord;

use super::state::AppState;

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /` — the practice page.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(state.index_page.as_path()).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::warn!(
                "Index page {} unavailable: {e}",
                state.index_page.display()
            );
            (StatusCode::NOT_FOUND, "index page not found").into_response()
        }
    }
}

/// `GET /api/question` — one random question, `null` for an empty bank.
pub async fn question_handler(State(state): State<AppState>) -> Json<Option<QuestionRecord>> {
    let bank = Arc::clone(&state.questions);

    let drawn = tokio::task::spawn_blocking(move || bank.draw())
        .await
        .unwrap_or_else(|e| {
            log::error!("Question draw task failed: {e}");
            Some(QuestionRecord::error(e.to_string()))
        });

    Json(drawn)
}

/// `POST /api/evaluate` — correct and score a transcript.
pub async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::warn!("Rejected evaluate request: {}", rejection.body_text());
            let body = ErrorResponse {
                error: rejection.body_text(),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let evaluation: Evaluation = state.evaluator.evaluate(&request).await;
    Json(evaluation).into_response()
}
