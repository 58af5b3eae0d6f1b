mod catalog;
mod exercises;
mod health;
mod lessons;
mod tts;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/languages", get(catalog::languages))
        .route("/api/list", get(catalog::lesson_list))
        .route("/api/lesson", get(lessons::lesson))
        .route("/api/exercise", post(exercises::exercise))
        .route("/api/tts", post(tts::synthesize))
        .nest("/health", health::router())
        .nest("/api/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("route not found").into_response()
}
