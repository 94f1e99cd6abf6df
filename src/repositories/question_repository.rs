use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Ordered store of bank questions. `list` hands out a snapshot; later writes
/// do not show up in it.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn add(&self, question: Question) -> AppResult<Question>;
    async fn replace(&self, question: Question) -> AppResult<Question>;
    async fn remove(&self, id: &str) -> AppResult<()>;
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn add(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.iter().any(|q| q.id == question.id) {
            return Err(AppError::AlreadyExists(format!(
                "Question with id '{}' already exists",
                question.id
            )));
        }

        // newest first
        questions.insert(0, question.clone());
        Ok(question)
    }

    async fn replace(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        let slot = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question.id))
            })?;

        *slot = question.clone();
        Ok(question)
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != id);

        if questions.len() == before {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.questions.read().await.len())
    }
}
