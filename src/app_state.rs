use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryQuestionRepository, QuestionRepository},
    services::{
        question_service::QuestionService, sample_bank, suggestion_service::SuggestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub suggestion_service: Arc<SuggestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let questions = if config.seed_sample_bank {
            let questions = sample_bank::sample_questions(&mut rand::rng());
            log::info!("Seeded question bank with {} sample questions", questions.len());
            questions
        } else {
            Vec::new()
        };

        let question_repository = Arc::new(InMemoryQuestionRepository::with_questions(questions));
        let suggestion_service = Arc::new(SuggestionService::from_config(&config));

        Self::from_parts(question_repository, suggestion_service, config)
    }

    pub fn from_parts(
        question_repository: Arc<dyn QuestionRepository>,
        suggestion_service: Arc<SuggestionService>,
        config: Config,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(question_repository)),
            suggestion_service,
            config: Arc::new(config),
        }
    }
}
