use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{
    ExamConfiguration, Grade, Level, QuestionDraft, QuestionType, TopicFilter,
};
use crate::services::model_client::QuestionRequest;

/// Body of question create and replace calls.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question_shape"))]
pub struct QuestionRequestDto {
    pub grade: Grade,

    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    pub level: Level,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    #[validate(length(min = 1, message = "Question content is required"))]
    pub content: String,

    #[serde(default)]
    pub options: Option<Vec<String>>,

    #[validate(length(min = 1, message = "Correct answer is required"))]
    pub correct_answer: String,

    #[serde(default)]
    pub explanation: String,
}

fn validate_question_shape(dto: &QuestionRequestDto) -> Result<(), ValidationError> {
    QuestionDraft::from(dto.clone())
        .validate_shape()
        .map_err(|err| ValidationError::new("question_shape").with_message(err.to_string().into()))
}

impl From<QuestionRequestDto> for QuestionDraft {
    fn from(dto: QuestionRequestDto) -> Self {
        QuestionDraft {
            grade: dto.grade,
            topic: dto.topic,
            level: dto.level,
            question_type: dto.question_type,
            content: dto.content,
            options: dto.options,
            correct_answer: dto.correct_answer.trim().to_string(),
            explanation: dto.explanation,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExamRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub school_name: String,

    #[serde(default)]
    pub class_name: String,

    #[validate(range(min = 1, max = 600))]
    pub time_minutes: u32,

    pub grade: Grade,

    pub topic: TopicFilter,

    #[validate(range(min = 1, max = 200))]
    pub num_questions: usize,

    #[validate(range(max = 100))]
    pub mc_ratio: u8,
}

impl From<GenerateExamRequestDto> for ExamConfiguration {
    fn from(dto: GenerateExamRequestDto) -> Self {
        ExamConfiguration {
            title: dto.title,
            school_name: dto.school_name,
            class_name: dto.class_name,
            time_minutes: dto.time_minutes,
            grade: dto.grade,
            topic: dto.topic,
            num_questions: dto.num_questions,
            mc_ratio: dto.mc_ratio,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestQuestionRequestDto {
    pub grade: Grade,

    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    pub level: Level,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Overrides the configured preferred model for this call.
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
}

impl From<&SuggestQuestionRequestDto> for QuestionRequest {
    fn from(dto: &SuggestQuestionRequestDto) -> Self {
        QuestionRequest {
            grade: dto.grade,
            topic: dto.topic.clone(),
            level: dto.level,
            question_type: dto.question_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionListParams {
    pub grade: Option<Grade>,
    pub search: Option<String>,
}
