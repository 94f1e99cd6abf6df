use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    constants::question_prompt::{question_request_prompt, QUESTION_AUTHOR_SYSTEM_PROMPT},
    models::domain::{Grade, Level, QuestionDraft, QuestionType},
};

/// Failure of a single model candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Api(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

impl ModelError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ModelError::Authentication(_))
    }
}

impl From<OpenAIError> for ModelError {
    fn from(err: OpenAIError) -> Self {
        let message = err.to_string();
        if is_credential_failure(&message) {
            ModelError::Authentication(message)
        } else {
            ModelError::Api(message)
        }
    }
}

fn is_credential_failure(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ["api key", "api_key", "unauthorized", "unauthenticated"]
        .iter()
        .any(|needle| lowered.contains(needle))
}

/// What the authoring UI asks the model to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub grade: Grade,
    pub topic: String,
    pub level: Level,
    pub question_type: QuestionType,
}

/// A backend able to write one question with a named model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate_question(
        &self,
        model: &str,
        request: &QuestionRequest,
    ) -> Result<QuestionDraft, ModelError>;
}

/// JSON object the model must answer with.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestionPayload {
    /// Question text.
    pub content: String,
    /// Multiple-choice only: exactly four strings starting with "A. ", "B. ", "C. ", "D. ".
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// A/B/C/D for multiple-choice, a short final answer otherwise.
    pub correct_answer: String,
    /// Worked solution.
    pub explanation: String,
}

/// Turns the model's reply text into a draft for `request`.
pub fn parse_question_reply(text: &str, request: &QuestionRequest) -> Result<QuestionDraft, ModelError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(ModelError::MalformedResponse("API returned empty text".to_string()));
    }

    let payload: GeneratedQuestionPayload = serde_json::from_str(body)
        .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

    let (options, correct_answer) = match request.question_type {
        QuestionType::MultipleChoice => (
            payload.options,
            normalize_choice_label(&payload.correct_answer),
        ),
        QuestionType::Essay => (None, payload.correct_answer.trim().to_string()),
    };

    let draft = QuestionDraft {
        grade: request.grade,
        topic: request.topic.clone(),
        level: request.level,
        question_type: request.question_type,
        content: payload.content,
        options,
        correct_answer,
        explanation: payload.explanation,
    };

    draft
        .validate_shape()
        .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

    Ok(draft)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

static CHOICE_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Da-d])(?:[.):]|\s|$)").expect("CHOICE_LABEL_REGEX is a valid regex pattern")
});

/// "b", " B. 15" and "B" all become "B". Anything else is returned trimmed.
fn normalize_choice_label(answer: &str) -> String {
    CHOICE_LABEL_REGEX
        .captures(answer)
        .and_then(|caps| caps.get(1))
        .map(|label| label.as_str().to_ascii_uppercase())
        .unwrap_or_else(|| answer.trim().to_string())
}

/// Talks to any OpenAI-compatible chat completion endpoint.
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiModelClient {
    pub fn new(api_key: &SecretString, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
        }
    }

    fn build_request(model: &str, request: &QuestionRequest) -> Result<Value, ModelError> {
        let schema = serde_json::to_value(schemars::schema_for!(GeneratedQuestionPayload))
            .map_err(|e| ModelError::Api(format!("Failed to build response schema: {}", e)))?;

        Ok(json!({
            "model": model,
            "messages": [
                { "role": "system", "content": QUESTION_AUTHOR_SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": question_request_prompt(
                        request.grade,
                        &request.topic,
                        request.level,
                        request.question_type,
                    )
                }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "question", "schema": schema }
            }
        }))
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn generate_question(
        &self,
        model: &str,
        request: &QuestionRequest,
    ) -> Result<QuestionDraft, ModelError> {
        let body = Self::build_request(model, request)?;
        let response: Value = self.client.chat().create_byot(body).await?;

        let text = response["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();

        parse_question_reply(text, request)
    }
}
