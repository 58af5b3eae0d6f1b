use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::services::llm_provider::LlmProvider;
use crate::services::tts::TtsService;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    llm: Arc<LlmProvider>,
    tts: Arc<TtsService>,
}

impl AppState {
    pub fn new(llm: LlmProvider, tts: TtsService) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            llm: Arc::new(llm),
            tts: Arc::new(tts),
        }
    }

    pub fn from_env() -> Self {
        Self::new(LlmProvider::from_env(), TtsService::from_env())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn llm(&self) -> Arc<LlmProvider> {
        Arc::clone(&self.llm)
    }

    pub fn tts(&self) -> Arc<TtsService> {
        Arc::clone(&self.tts)
    }
}
