use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the transcription endpoint.
///
/// Unrecognizable audio is the caller's problem; a failing recognition
/// backend and everything else in the pipeline are server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not understand audio")]
    UnrecognizedSpeech,
    #[error("Speech recognition error: {0}")]
    RecognitionService(String),
    #[error("Error processing audio: {0}")]
    Processing(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnrecognizedSpeech => StatusCode::BAD_REQUEST,
            ApiError::RecognitionService(_) | ApiError::Processing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_speech_is_a_client_error() {
        let response = ApiError::UnrecognizedSpeech.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn service_and_processing_failures_are_server_errors() {
        let response = ApiError::RecognitionService("quota exceeded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Processing("bad wav".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_embed_the_originating_error() {
        assert_eq!(
            ApiError::UnrecognizedSpeech.to_string(),
            "Could not understand audio"
        );
        assert_eq!(
            ApiError::RecognitionService("connection refused".to_string()).to_string(),
            "Speech recognition error: connection refused"
        );
        assert_eq!(
            ApiError::Processing("empty upload".to_string()).to_string(),
            "Error processing audio: empty upload"
        );
    }
}
