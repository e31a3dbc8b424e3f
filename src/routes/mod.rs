//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/upload-resume` - Resume upload and candidate detail extraction
//! - `/api/generate-question` - Interview question generation
//! - `/api/evaluate-answer` - Answer evaluation
//! - `/api/generate-summary` - Hiring summary

pub mod interview;
pub mod relay;
pub mod resume;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// Every route lives under `/api/`, accepts requests from any origin and
/// answers with JSON.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(resume::router(state.clone()))
        .merge(interview::router(state));

    apply_cors(api_router).layer(TraceLayer::new_for_http())
}
