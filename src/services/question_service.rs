use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamConfiguration, GeneratedExam, Grade, Question, QuestionDraft},
    repositories::QuestionRepository,
    services::exam_assembler,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Bank listing: optional grade match plus case-insensitive search in the content.
    pub async fn list_questions(
        &self,
        grade: Option<Grade>,
        search: Option<&str>,
    ) -> AppResult<Vec<Question>> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let questions = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|q| grade.map_or(true, |wanted| wanted == q.grade))
            .filter(|q| {
                needle
                    .as_ref()
                    .map_or(true, |n| q.content.to_lowercase().contains(n))
            })
            .collect();

        Ok(questions)
    }

    pub async fn get_question(&self, id: &str) -> AppResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn create_question(&self, draft: QuestionDraft) -> AppResult<Question> {
        let question = Question::from_draft(draft)?;
        let created = self.repository.add(question).await?;
        log::info!("Added {} question {} to the bank", created.question_type, created.id);
        Ok(created)
    }

    /// Replaces the whole record; questions are never edited in place.
    pub async fn update_question(&self, id: &str, draft: QuestionDraft) -> AppResult<Question> {
        let question = Question::with_id(id, draft)?;
        self.repository.replace(question).await
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.repository.remove(id).await?;
        log::info!("Removed question {} from the bank", id);
        Ok(())
    }

    pub async fn count(&self) -> AppResult<usize> {
        self.repository.count().await
    }

    pub async fn generate_exam(&self, config: &ExamConfiguration) -> AppResult<GeneratedExam> {
        let snapshot = self.repository.list().await?;

        exam_assembler::assemble(&snapshot, config).map_err(|err| {
            log::warn!("Exam assembly for grade {} failed: {}", config.grade, err);
            AppError::from(err)
        })
    }
}
