use serde::Serialize;

use crate::constants::catalog::{FALLBACK_MODELS, TOPICS};
use crate::models::domain::{Grade, Level, Question, QuestionType};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type QuestionResponse = ApiResponse<Question>;

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
    pub total: usize,
}

impl From<Vec<Question>> for QuestionListResponse {
    fn from(items: Vec<Question>) -> Self {
        QuestionListResponse {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub message: String,
}

/// Values the authoring UI offers in its pickers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub grades: Vec<Grade>,
    pub levels: Vec<Level>,
    pub question_types: Vec<QuestionType>,
    pub topics: Vec<&'static str>,
    pub models: Vec<&'static str>,
    pub preferred_model: String,
    pub ai_enabled: bool,
}

impl CatalogResponse {
    pub fn new(preferred_model: &str, ai_enabled: bool) -> Self {
        CatalogResponse {
            grades: Grade::ALL.to_vec(),
            levels: Level::ALL.to_vec(),
            question_types: QuestionType::ALL.to_vec(),
            topics: TOPICS.to_vec(),
            models: FALLBACK_MODELS.to_vec(),
            preferred_model: preferred_model.to_string(),
            ai_enabled,
        }
    }
}
