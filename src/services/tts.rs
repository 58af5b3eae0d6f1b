//! Speech synthesis adapter.
//!
//! Pretrained synthesis models sit behind the [`SpeechModel`] trait: text in,
//! raw samples plus a sample rate out. The service picks a model id from the
//! requested dialect, loads it through a [`ModelLoader`] (cached per process,
//! no eviction — the dialect set is small and fixed) and turns the samples
//! into a base64 WAV payload.

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

const DEFAULT_MODEL_ID: &str = "facebook/mms-tts-shi";
const DEFAULT_SYNTH_BINARY: &str = "mms-tts";

/// Tamazight dialect -> MMS model id. Unlisted languages use the default.
const LANGUAGE_MODELS: &[(&str, &str)] = &[
    ("Central Atlas Tamazight", "facebook/mms-tts-shi"),
    ("Kabyle", "facebook/mms-tts-kab"),
    ("Tachelhit", "facebook/mms-tts-shi"),
    ("Tarifit", "facebook/mms-tts-rif"),
    ("Tamasheq", "facebook/mms-tts-taq"),
];

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("No text provided")]
    EmptyText,
    #[error("TTS model not available")]
    ModelUnavailable(String),
    #[error("TTS synthesis failed: {0}")]
    Synthesis(String),
}

/// Mono audio as produced by a synthesis model.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

#[derive(Debug, Serialize)]
pub struct TtsAudio {
    pub audio: String,
    pub format: &'static str,
    pub sample_rate: u32,
}

pub trait SpeechModel: Send + Sync {
    fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, TtsError>;
}

pub trait ModelLoader: Send + Sync {
    fn load(&self, model_id: &str) -> Result<Arc<dyn SpeechModel>, TtsError>;
}

/// Loads models backed by an external synthesizer command that takes the
/// model id as an argument, reads text on stdin and writes a WAV stream to
/// stdout (the piper-style contract). `TTS_BINARY` overrides the command.
pub struct ProcessModelLoader {
    binary: String,
}

impl ProcessModelLoader {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn from_env() -> Self {
        let binary = std::env::var("TTS_BINARY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYNTH_BINARY.to_string());
        Self::new(binary)
    }

    fn binary_exists(&self) -> bool {
        if self.binary.contains('/') {
            return Path::new(&self.binary).exists();
        }

        std::env::var_os("PATH")
            .map(|paths| {
                std::env::split_paths(&paths).any(|dir| dir.join(&self.binary).exists())
            })
            .unwrap_or(false)
    }
}

impl ModelLoader for ProcessModelLoader {
    fn load(&self, model_id: &str) -> Result<Arc<dyn SpeechModel>, TtsError> {
        if !self.binary_exists() {
            return Err(TtsError::ModelUnavailable(format!(
                "synthesizer binary not found: {}",
                self.binary
            )));
        }

        Ok(Arc::new(ProcessModel {
            binary: self.binary.clone(),
            model_id: model_id.to_string(),
        }))
    }
}

struct ProcessModel {
    binary: String,
    model_id: String,
}

impl SpeechModel for ProcessModel {
    fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, TtsError> {
        let mut child = Command::new(&self.binary)
            .arg("--model")
            .arg(&self.model_id)
            .arg("--output-file")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TtsError::Synthesis(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .and_then(|_| stdin.write_all(b"\n"))
                .map_err(|e| TtsError::Synthesis(e.to_string()))?;
        }

        // Synthesis carries no timeout: once dispatched it runs to completion.
        let output = child
            .wait_with_output()
            .map_err(|e| TtsError::Synthesis(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TtsError::Synthesis(stderr.trim().to_string()));
        }

        decode_wav(&output.stdout)
    }
}

/// Decodes a WAV byte stream into mono f32 samples, keeping the first
/// channel of interleaved multi-channel audio.
fn decode_wav(bytes: &[u8]) -> Result<SynthesizedAudio, TtsError> {
    let reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| TtsError::Synthesis(format!("undecodable synthesizer output: {e}")))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .filter_map(Result::ok)
            .collect(),
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .filter_map(Result::ok)
                .map(|s| s as f32 / full_scale)
                .collect()
        }
    };

    let samples = if channels > 1 {
        samples.into_iter().step_by(channels).collect()
    } else {
        samples
    };

    Ok(SynthesizedAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}

pub struct TtsService {
    loader: Arc<dyn ModelLoader>,
    models: Mutex<HashMap<String, Arc<dyn SpeechModel>>>,
}

impl TtsService {
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            loader,
            models: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(ProcessModelLoader::from_env()))
    }

    pub fn model_id_for(language: &str) -> &'static str {
        LANGUAGE_MODELS
            .iter()
            .find(|(name, _)| *name == language)
            .map(|(_, id)| *id)
            .unwrap_or(DEFAULT_MODEL_ID)
    }

    /// Get-or-load keyed by model id. The lock is held across the load so
    /// concurrent first requests for the same dialect load the model once;
    /// a failed load leaves the cache untouched.
    fn model_for(&self, model_id: &str) -> Result<Arc<dyn SpeechModel>, TtsError> {
        let mut models = self.models.lock();
        if let Some(model) = models.get(model_id) {
            return Ok(Arc::clone(model));
        }

        info!(model_id, "loading TTS model");
        let model = self.loader.load(model_id)?;
        models.insert(model_id.to_string(), Arc::clone(&model));
        Ok(model)
    }

    /// Full synthesis pipeline: model selection, synthesis, peak
    /// normalization into [-1, 1], 16-bit quantization and in-memory WAV
    /// encoding. Blocking; callers on the async runtime should wrap it in
    /// `spawn_blocking`.
    pub fn synthesize(&self, text: &str, language: &str) -> Result<TtsAudio, TtsError> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        let model = self.model_for(Self::model_id_for(language))?;
        let audio = model.synthesize(text)?;
        encode_wav_base64(&audio)
    }
}

fn encode_wav_base64(audio: &SynthesizedAudio) -> Result<TtsAudio, TtsError> {
    let peak = audio
        .samples
        .iter()
        .fold(0.0f32, |acc, sample| acc.max(sample.abs()));

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| TtsError::Synthesis(e.to_string()))?;
        for &sample in &audio.samples {
            let normalized = if peak > 0.0 { sample / peak } else { sample };
            let quantized = (normalized * 32767.0).clamp(-32768.0, 32767.0) as i16;
            writer
                .write_sample(quantized)
                .map_err(|e| TtsError::Synthesis(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| TtsError::Synthesis(e.to_string()))?;
    }

    Ok(TtsAudio {
        audio: BASE64.encode(cursor.into_inner()),
        format: "wav",
        sample_rate: audio.sample_rate,
    })
}
