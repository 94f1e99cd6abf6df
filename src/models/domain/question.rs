use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Labels a multiple-choice answer may take, in option order.
pub const CHOICE_LABELS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Grade {
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Six, Grade::Seven, Grade::Eight, Grade::Nine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Six => "6",
            Grade::Seven => "7",
            Grade::Eight => "8",
            Grade::Nine => "9",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Level {
    #[serde(rename = "Nhận biết")]
    Recognition,
    #[serde(rename = "Thông hiểu")]
    Comprehension,
    #[serde(rename = "Vận dụng")]
    Application,
    #[serde(rename = "Vận dụng cao")]
    AdvancedApplication,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Recognition,
        Level::Comprehension,
        Level::Application,
        Level::AdvancedApplication,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Recognition => "Nhận biết",
            Level::Comprehension => "Thông hiểu",
            Level::Application => "Vận dụng",
            Level::AdvancedApplication => "Vận dụng cao",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuestionType {
    #[serde(rename = "Trắc nghiệm")]
    MultipleChoice,
    #[serde(rename = "Tự luận")]
    Essay,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::MultipleChoice, QuestionType::Essay];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Trắc nghiệm",
            QuestionType::Essay => "Tự luận",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionShapeError {
    #[error("multiple-choice questions need exactly 4 options, got {0}")]
    OptionCount(usize),

    #[error("multiple-choice answer must be one of A, B, C, D, got '{0}'")]
    ChoiceLabel(String),

    #[error("open-response questions cannot carry options")]
    UnexpectedOptions,
}

/// A question as authored, before it has an id in the bank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub grade: Grade,
    pub topic: String,
    pub level: Level,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuestionDraft {
    /// Checks the option/answer invariant for the draft's question type.
    pub fn validate_shape(&self) -> Result<(), QuestionShapeError> {
        match self.question_type {
            QuestionType::MultipleChoice => {
                let count = self.options.as_ref().map_or(0, Vec::len);
                if count != CHOICE_LABELS.len() {
                    return Err(QuestionShapeError::OptionCount(count));
                }
                if !CHOICE_LABELS.contains(&self.correct_answer.as_str()) {
                    return Err(QuestionShapeError::ChoiceLabel(self.correct_answer.clone()));
                }
                Ok(())
            }
            QuestionType::Essay => match &self.options {
                Some(options) if !options.is_empty() => Err(QuestionShapeError::UnexpectedOptions),
                _ => Ok(()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub grade: Grade,
    pub topic: String,
    pub level: Level,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    pub fn from_draft(draft: QuestionDraft) -> Result<Self, QuestionShapeError> {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Builds a question under an existing id, used when an edit replaces a record.
    pub fn with_id(id: impl Into<String>, draft: QuestionDraft) -> Result<Self, QuestionShapeError> {
        draft.validate_shape()?;

        // An empty options list on an essay is the same as none.
        let options = match draft.question_type {
            QuestionType::MultipleChoice => draft.options,
            QuestionType::Essay => None,
        };

        Ok(Question {
            id: id.into(),
            grade: draft.grade,
            topic: draft.topic,
            level: draft.level,
            question_type: draft.question_type,
            content: draft.content,
            options,
            correct_answer: draft.correct_answer,
            explanation: draft.explanation,
        })
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.question_type == QuestionType::MultipleChoice
    }
}
