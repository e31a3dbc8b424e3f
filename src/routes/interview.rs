//! Interview endpoints
//!
//! - `POST /api/generate-question` - `{ level }` -> `{ question, answer }`
//! - `POST /api/evaluate-answer` - `{ question, userAnswer, correctAnswer }` -> `{ isCorrect, feedback, score }`
//! - `POST /api/generate-summary` - `{ candidate }` -> `{ summary, finalScore }`

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use super::relay;
use crate::models::{AppState, EvaluateAnswerRequest, QuestionRequest, SummaryRequest};
use crate::prompts;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-question", post(generate_question))
        .route("/api/evaluate-answer", post(evaluate_answer))
        .route("/api/generate-summary", post(generate_summary))
        .with_state(state)
}

/// Message for bodies that are not a JSON object. Parser detail stays in the log.
pub const INVALID_BODY: &str = "Invalid JSON body";

fn body_rejection(endpoint: &'static str, rejection: JsonRejection) -> Response {
    warn!(endpoint, error = %rejection, "Rejected request body");
    relay::error_response(rejection.status(), INVALID_BODY)
}

async fn generate_question(
    State(state): State<AppState>,
    body: Result<Json<QuestionRequest>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "generate-question";
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(ENDPOINT, rejection),
    };
    let level = prompts::interpolate(&request.level);
    info!(level = %level, "Question generation request received");

    let prompt = prompts::question_prompt(&level);
    let result = relay::complete(&state.llm, &prompt).await;
    relay::respond(ENDPOINT, "Failed to generate question", result)
}

async fn evaluate_answer(
    State(state): State<AppState>,
    body: Result<Json<EvaluateAnswerRequest>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "evaluate-answer";
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(ENDPOINT, rejection),
    };
    let question = prompts::interpolate(&request.question);
    let user_answer = prompts::interpolate(&request.user_answer);
    let correct_answer = prompts::interpolate(&request.correct_answer);
    info!(
        question_len = question.len(),
        answer_len = user_answer.len(),
        "Answer evaluation request received"
    );

    let prompt = prompts::evaluation_prompt(&question, &user_answer, &correct_answer);
    let result = relay::complete(&state.llm, &prompt).await;
    relay::respond(ENDPOINT, "Failed to evaluate answer", result)
}

async fn generate_summary(
    State(state): State<AppState>,
    body: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "generate-summary";
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(ENDPOINT, rejection),
    };
    info!("Summary generation request received");

    let prompt = prompts::summary_prompt(&request.candidate);
    let result = relay::complete(&state.llm, &prompt).await;
    relay::respond(ENDPOINT, "Failed to generate summary", result)
}
