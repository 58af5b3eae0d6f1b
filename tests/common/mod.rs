#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use awal_backend::services::llm_provider::{LlmConfig, LlmProvider};
use awal_backend::services::tts::{
    ModelLoader, SpeechModel, SynthesizedAudio, TtsError, TtsService,
};
use awal_backend::state::AppState;

/// Endpoint nothing listens on; lesson requests against it exercise the
/// degraded path.
pub const UNREACHABLE_LLM: &str = "http://127.0.0.1:9/api/generate";

pub struct StubModel;

impl SpeechModel for StubModel {
    fn synthesize(&self, _text: &str) -> Result<SynthesizedAudio, TtsError> {
        Ok(SynthesizedAudio {
            samples: vec![0.0, 0.25, -0.5, 0.5],
            sample_rate: 16_000,
        })
    }
}

pub struct StubLoader;

impl ModelLoader for StubLoader {
    fn load(&self, _model_id: &str) -> Result<Arc<dyn SpeechModel>, TtsError> {
        Ok(Arc::new(StubModel))
    }
}

pub fn create_test_app() -> Router {
    create_test_app_with_llm_endpoint(UNREACHABLE_LLM)
}

pub fn create_test_app_with_llm_endpoint(endpoint: &str) -> Router {
    let llm = LlmProvider::new(LlmConfig {
        endpoint: endpoint.to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    });
    let tts = TtsService::new(Arc::new(StubLoader));

    awal_backend::create_app(AppState::new(llm, tts))
}
