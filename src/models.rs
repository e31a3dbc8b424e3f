use std::sync::Arc;

use serde_json::Value;

use crate::llm::LLM;

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<LLM>,
}

impl AppState {
    pub fn new(llm: LLM) -> Self {
        Self { llm: Arc::new(llm) }
    }
}

// API Request types
// Fields take any JSON value and are rendered into the prompt as text.
// Missing fields read as `null`; nothing here is validated.

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct QuestionRequest {
    pub level: Value,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    pub question: Value,
    pub user_answer: Value,
    pub correct_answer: Value,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SummaryRequest {
    pub candidate: Value,
}

// Response shapes the model is asked to produce.
// Handlers relay the model's JSON as-is; these types document the contract.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResumeDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    pub is_correct: bool,
    pub feedback: String,
    pub score: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub summary: String,
    pub final_score: f64,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
