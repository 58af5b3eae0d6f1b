use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::services::lesson::{parse_lesson_response, LessonContent};
use crate::services::prompts;
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "Central Atlas Tamazight";
const DEFAULT_TOPIC: &str = "Greetings";

#[derive(Debug, Deserialize)]
pub struct LessonQuery {
    language: Option<String>,
    topic: Option<String>,
}

/// Generates a lesson by prompting the completion service and decoding its
/// reply. Upstream failures never surface as hard errors: a reply we cannot
/// decode becomes the lesson body verbatim, and a transport failure becomes
/// an empty lesson.
pub async fn lesson(
    State(state): State<AppState>,
    Query(query): Query<LessonQuery>,
) -> Json<LessonContent> {
    let language = query
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let topic = query.topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let prompt = prompts::lesson_prompt(&language, &topic);
    match state.llm().generate(&prompt).await {
        Ok(text) => Json(parse_lesson_response(&text)),
        Err(err) => {
            warn!(error = %err, %language, %topic, "lesson generation failed");
            Json(LessonContent {
                lesson: String::new(),
                vocabulary: Vec::new(),
            })
        }
    }
}
