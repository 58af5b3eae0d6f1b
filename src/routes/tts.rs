use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::response::SoftError;
use crate::services::tts::TtsAudio;
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "Central Atlas Tamazight";

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    text: String,
    language: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum TtsReply {
    Audio(TtsAudio),
    Error(SoftError),
}

/// Synthesizes speech for the given text. Synthesis is a blocking call into
/// the model, so it runs on the blocking pool; every failure is converted to
/// an error payload at this boundary.
pub async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Json<TtsReply> {
    let TtsRequest { text, language } = request;
    let language = language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let tts = state.tts();
    let result = tokio::task::spawn_blocking(move || tts.synthesize(&text, &language)).await;

    match result {
        Ok(Ok(audio)) => Json(TtsReply::Audio(audio)),
        Ok(Err(err)) => {
            warn!(error = %err, "speech synthesis failed");
            Json(TtsReply::Error(SoftError::new(err.to_string())))
        }
        Err(err) => {
            error!(error = %err, "speech synthesis task aborted");
            Json(TtsReply::Error(SoftError::new(
                "TTS synthesis failed: internal error",
            )))
        }
    }
}
