// Interview Relay - turns resumes and interview answers into LLM prompts and relays the JSON back

pub mod config;
pub mod types;
pub mod models;
pub mod llm;
pub mod documents;
pub mod prompts;
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
