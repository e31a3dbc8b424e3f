//! Response relay shared by every endpoint.
//!
//! Runs the completion, parses it as JSON and turns the outcome into the
//! HTTP response. Errors are logged with their endpoint and mapped to a
//! `{ "error": ... }` body that never carries internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, info};

use crate::llm::LLM;
use crate::models::ErrorResponse;
use crate::types::{AppError, AppResult};

/// Send `prompt` to the model and parse its answer. Malformed JSON is an error.
pub async fn complete(llm: &LLM, prompt: &str) -> AppResult<Value> {
    let completion = llm.query_json(prompt).await?;
    Ok(serde_json::from_str(&completion)?)
}

/// Status code and caller-facing message for an error.
pub fn public_error(err: &AppError, generic: &str) -> (StatusCode, String) {
    match err {
        AppError::NoFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
        AppError::UnsupportedFileType(_) => {
            (StatusCode::BAD_REQUEST, "Unsupported file type".to_string())
        }
        AppError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::LLMService { message, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("AI service error: {}", message),
        ),
        AppError::Extraction(_)
        | AppError::LLMApi(_)
        | AppError::MalformedCompletion(_)
        | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, generic.to_string()),
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

/// Final step of every handler.
pub fn respond(endpoint: &'static str, generic: &'static str, result: AppResult<Value>) -> Response {
    match result {
        Ok(body) => {
            info!(endpoint, "Request completed");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let (status, message) = public_error(&e, generic);
            error!(endpoint, status = status.as_u16(), error = %e, "Request failed");
            error_response(status, message)
        }
    }
}
