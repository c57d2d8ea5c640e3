use axum::{
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::asr::interface::RecognitionError;
use crate::audio::{AudioClip, ScopedWavFile};
use crate::error::ApiError;
use crate::state::AppState;

/// Fixed instruction prepended to every recognized transcript before it is
/// handed to the model.
const PROMPT_PREFIX: &str = "Process this transcribed text: ";

#[derive(Debug, Serialize)]
pub struct TranscriptionResult {
    pub response: String,
    pub transcription: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/transcribe", post(transcribe_audio))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let model_healthy = state.llm.health_check().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "model_service": model_healthy,
    }))
}

/// Transcribe an uploaded audio file and process the transcript with the
/// local model. The upload lives in a uniquely named temp file for the
/// duration of the request; the guard removes it on every exit path.
async fn transcribe_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscriptionResult>, ApiError> {
    let bytes = read_audio_field(multipart).await?;
    debug!("Received {} bytes of audio", bytes.len());

    let cache_dir = std::path::Path::new(&state.config.system_config.cache_dir);
    let temp_audio = ScopedWavFile::create(cache_dir, &bytes)
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    let clip = AudioClip::from_wav_file(temp_audio.path())
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    let transcription = state
        .recognizer
        .recognize(&clip)
        .await
        .map_err(|e| match e {
            RecognitionError::UnknownValue => ApiError::UnrecognizedSpeech,
            RecognitionError::Request(msg) => ApiError::RecognitionService(msg),
        })?;

    info!("Recognized {} chars of speech", transcription.len());

    let prompt = format!("{}{}", PROMPT_PREFIX, transcription);
    let response = state
        .llm
        .generate(&state.config.model_config.model, &prompt)
        .await
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    Ok(Json(TranscriptionResult {
        response,
        transcription,
    }))
}

/// Buffer the uploaded `file` field fully into memory.
async fn read_audio_field(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Processing(e.to_string()))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Processing(e.to_string()))?;
            return Ok(data.to_vec());
        }
    }

    Err(ApiError::Processing("no audio file provided".to_string()))
}
