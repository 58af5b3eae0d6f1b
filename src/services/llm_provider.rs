use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_MODEL: &str = "translategemma:12b";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for a local Ollama-style completion endpoint. One plain
/// request/response call per prompt: streaming stays disabled and failures
/// surface as [`LlmError`] for the caller to degrade on — no retries.
#[derive(Clone)]
pub struct LlmProvider {
    config: LlmConfig,
    client: reqwest::Client,
}

impl LlmProvider {
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    pub fn from_env() -> Self {
        let endpoint = env_string("OLLAMA_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let model = env_string("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout = Duration::from_millis(env_u64("LLM_TIMEOUT").unwrap_or(DEFAULT_TIMEOUT_MS));

        Self::new(LlmConfig {
            endpoint,
            model,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let payload = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "context": null,
        });

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::HttpStatus { status, body });
        }

        let bytes = resp.bytes().await?;
        let decoded: GenerateResponse = serde_json::from_slice(&bytes)?;
        Ok(decoded.response)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}
