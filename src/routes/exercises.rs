use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::SoftError;
use crate::services::exercise::{generate_exercise, Exercise};
use crate::services::lesson::VocabularyItem;

#[derive(Debug, Deserialize)]
pub struct ExerciseRequest {
    language: String,
    vocabulary: Vec<VocabularyItem>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ExerciseReply {
    Exercise(Exercise),
    Error(SoftError),
}

/// Derives a matching exercise from the lesson vocabulary in the request.
/// An empty vocabulary answers with an error payload instead of a partial
/// exercise.
pub async fn exercise(Json(request): Json<ExerciseRequest>) -> Json<ExerciseReply> {
    match generate_exercise(&request.language, &request.vocabulary) {
        Ok(exercise) => Json(ExerciseReply::Exercise(exercise)),
        Err(err) => Json(ExerciseReply::Error(SoftError::new(err.to_string()))),
    }
}
