use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::Config,
    constants::catalog::FALLBACK_MODELS,
    models::domain::QuestionDraft,
    services::model_client::{ModelClient, OpenAiModelClient, QuestionRequest},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("AI suggestions are not configured, set AI_API_KEY")]
    NotConfigured,

    #[error("AI provider rejected the credentials: {0}")]
    Authentication(String),

    #[error("All models failed. Last error: {last_error}")]
    AllModelsFailed { last_error: String },
}

/// Ordered list of model identifiers to fall back through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    models: Vec<String>,
}

impl FallbackPolicy {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }

    /// The preferred model first, then every other model in policy order.
    pub fn candidates(&self, preferred: &str) -> Vec<String> {
        std::iter::once(preferred.to_string())
            .chain(self.models.iter().filter(|m| *m != preferred).cloned())
            .collect()
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(FALLBACK_MODELS)
    }
}

pub struct SuggestionService {
    client: Option<Arc<dyn ModelClient>>,
    policy: FallbackPolicy,
    preferred_model: String,
}

impl SuggestionService {
    pub fn new(
        client: Option<Arc<dyn ModelClient>>,
        policy: FallbackPolicy,
        preferred_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            policy,
            preferred_model: preferred_model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = config.ai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiModelClient::new(key, &config.ai_api_base)) as Arc<dyn ModelClient>
        });

        if client.is_none() {
            log::warn!("AI_API_KEY is not set, question suggestions are disabled");
        }

        Self::new(client, FallbackPolicy::default(), config.ai_preferred_model.clone())
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn preferred_model(&self) -> &str {
        &self.preferred_model
    }

    /// Asks each candidate model in turn for a draft. A credential failure
    /// stops the walk at once; any other failure moves on to the next model.
    pub async fn suggest(
        &self,
        request: &QuestionRequest,
        preferred_model: Option<&str>,
    ) -> Result<QuestionDraft, AiError> {
        let client = self.client.as_ref().ok_or(AiError::NotConfigured)?;
        let preferred = preferred_model.unwrap_or(&self.preferred_model);

        let mut last_error = String::new();
        for model in self.policy.candidates(preferred) {
            match client.generate_question(&model, request).await {
                Ok(draft) => {
                    log::info!(
                        "Model {} suggested a {} question for grade {}",
                        model,
                        request.question_type,
                        request.grade
                    );
                    return Ok(draft);
                }
                Err(err) if err.is_authentication() => {
                    log::error!("Model {} rejected the credentials: {}", model, err);
                    return Err(AiError::Authentication(err.to_string()));
                }
                Err(err) => {
                    log::warn!("Model {} failed. Error: {}", model, err);
                    last_error = err.to_string();
                }
            }
        }

        Err(AiError::AllModelsFailed { last_error })
    }
}
