use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    response::Response,
    routing::post,
    Router,
};
use tracing::{debug, info, warn};

use super::relay;
use crate::documents::{DocumentProcessor, UploadedDocument};
use crate::models::AppState;
use crate::prompts;
use crate::types::{AppError, AppResult};

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/upload-resume", post(upload_resume))
        // Uploads are buffered whole with no size cap
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    info!("Resume upload request received");

    let result = async {
        // A request that is not multipart cannot carry a file
        let multipart = multipart.map_err(|e| {
            warn!(error = %e, "Resume upload without a multipart body");
            AppError::NoFile
        })?;

        let document = read_resume(multipart).await?;
        let text = DocumentProcessor::extract_text(document).await?;
        let prompt = prompts::resume_prompt(&text);
        relay::complete(&state.llm, &prompt).await
    }
    .await;

    relay::respond("upload-resume", "Failed to parse resume", result)
}

/// Buffer the first `resume` file field. Fields without a filename are plain
/// form values and are skipped.
async fn read_resume(mut multipart: Multipart) -> AppResult<UploadedDocument> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read file: {}", e)))?;

        debug!(filename = %filename, bytes = bytes.len(), "Resume file received");
        return Ok(UploadedDocument::from_filename(&filename, bytes.to_vec()));
    }

    Err(AppError::NoFile)
}
