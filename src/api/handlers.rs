use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, LanguagesResponse, VoicesResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::languages;
use crate::openai::SpeechRequest;
use crate::speech::{SpeechParams, Voice};
use crate::translate::{TranslationParams, TranslationResult};

const MISSING_TRANSLATE_PARAMS: &str = "Missing required parameters";
const MISSING_TEXT: &str = "Missing text parameter";
const TRANSLATION_FAILED: &str = "Translation failed";
const TTS_FAILED: &str = "TTS generation failed";

pub async fn translate(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslationResult>, AppError> {
    let body = body?;

    // Validate input
    let input = serde_json::from_slice::<TranslationParams>(&body)
        .ok()
        .and_then(TranslationParams::validate)
        .ok_or_else(|| AppError::BadRequest(MISSING_TRANSLATE_PARAMS.into()))?;

    let api_key = state.api_key()?;

    tracing::info!(
        "Translating {} chars: {} -> {}",
        input.text.chars().count(),
        input.source_lang,
        input.target_lang
    );

    let request = input.to_completion_request(&state.config.translation_model);
    let content = state
        .openai
        .chat_completion(api_key, &request, TRANSLATION_FAILED)
        .await?;

    Ok(Json(TranslationResult {
        translated_text: content.trim().to_string(),
    }))
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body?;

    // Validate input
    let input = serde_json::from_slice::<SpeechParams>(&body)
        .ok()
        .and_then(SpeechParams::normalize)
        .ok_or_else(|| AppError::BadRequest(MISSING_TEXT.into()))?;

    let api_key = state.api_key()?;

    tracing::info!(
        "Synthesizing {} chars: voice={}, speed={}",
        input.text.chars().count(),
        input.voice,
        input.speed
    );

    let request = SpeechRequest {
        model: state.config.speech_model.clone(),
        input: input.text,
        voice: input.voice.to_string(),
        speed: input.speed,
    };
    let audio = state.openai.speech(api_key, &request, TTS_FAILED).await?;

    // Return audio response
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        audio,
    )
        .into_response())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn list_voices() -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: Voice::ALL.iter().map(Voice::as_str).collect(),
        default: Voice::default().as_str(),
    })
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: languages::list(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream_configured: state.config.api_key().is_some(),
    })
}
