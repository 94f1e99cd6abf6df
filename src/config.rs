use std::env;

use secrecy::SecretString;

use crate::constants::catalog::{DEFAULT_AI_API_BASE, DEFAULT_MODEL};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub ai_api_key: Option<SecretString>,
    pub ai_api_base: String,
    pub ai_preferred_model: String,
    pub seed_sample_bank: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            ai_api_key: env::var("AI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            ai_api_base: env::var("AI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_AI_API_BASE.to_string()),
            ai_preferred_model: env::var("AI_PREFERRED_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            seed_sample_bank: env::var("SEED_SAMPLE_BANK")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            ai_api_key: None,
            ai_api_base: DEFAULT_AI_API_BASE.to_string(),
            ai_preferred_model: DEFAULT_MODEL.to_string(),
            seed_sample_bank: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
