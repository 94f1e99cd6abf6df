use serde::{Deserialize, Serialize};

use crate::models::domain::question::{Grade, Question};

/// Wire values meaning "do not filter by topic".
pub const ALL_TOPICS_SENTINELS: [&str; 2] = ["all", "Tất cả"];

/// Topic selection for an exam: a concrete topic or every topic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TopicFilter {
    All,
    Topic(String),
}

impl TopicFilter {
    pub fn matches(&self, topic: &str) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Topic(wanted) => wanted == topic,
        }
    }
}

impl From<String> for TopicFilter {
    fn from(value: String) -> Self {
        if ALL_TOPICS_SENTINELS.contains(&value.as_str()) {
            TopicFilter::All
        } else {
            TopicFilter::Topic(value)
        }
    }
}

impl From<&str> for TopicFilter {
    fn from(value: &str) -> Self {
        TopicFilter::from(value.to_string())
    }
}

impl From<TopicFilter> for String {
    fn from(filter: TopicFilter) -> Self {
        match filter {
            TopicFilter::All => ALL_TOPICS_SENTINELS[0].to_string(),
            TopicFilter::Topic(topic) => topic,
        }
    }
}

/// Parameters for one exam paper. Header fields are passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamConfiguration {
    pub title: String,
    pub school_name: String,
    pub class_name: String,
    pub time_minutes: u32,
    pub grade: Grade,
    pub topic: TopicFilter,
    pub num_questions: usize,
    pub mc_ratio: u8, // 0..=100, share of multiple-choice questions
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExam {
    pub config: ExamConfiguration,
    pub questions: Vec<Question>,
    pub date: String,
}

impl GeneratedExam {
    pub fn multiple_choice_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_multiple_choice()).count()
    }

    pub fn essay_count(&self) -> usize {
        self.questions.len() - self.multiple_choice_count()
    }
}
