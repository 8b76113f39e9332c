// src/config.rs
use crate::errors::{QuizError, Result};
use std::time::Duration;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub models: Vec<String>,
}

/// Configuration for an OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_base: String,
    pub api_key: String,
    pub models: Vec<String>,
}

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub api_base: String,
    pub models: Vec<String>,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: Option<GeminiConfig>,
    pub openai: Option<OpenAIConfig>,
    pub ollama: Option<OllamaConfig>,
    /// All configured models as `provider:model` strings.
    pub models: Vec<String>,
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Timeout applied to each upstream request.
    pub request_timeout: Duration,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables. At least one provider
    /// must be configured.
    pub fn from_env() -> Result<Self> {
        let mut all_models = Vec::new();

        let mut gemini_config = None;
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            let api_base = std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
            let models_str = std::env::var("GEMINI_MODELS")
                .unwrap_or_else(|_| "gemini-2.5-pro,gemini-2.5-flash".to_string());
            let models = parse_model_list(&models_str);
            all_models.extend(models.iter().map(|m| format!("gemini:{}", m)));
            gemini_config = Some(GeminiConfig { api_base, api_key, models });
        }

        let mut openai_config = None;
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            let api_base = std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
            let models_str =
                std::env::var("OPENAI_MODELS").unwrap_or_else(|_| "gpt-4o-mini".to_string());
            let models = parse_model_list(&models_str);
            all_models.extend(models.iter().map(|m| format!("openai:{}", m)));
            openai_config = Some(OpenAIConfig { api_base, api_key, models });
        }

        let mut ollama_config = None;
        if let Ok(api_base) = std::env::var("OLLAMA_API_BASE") {
            let models_str =
                std::env::var("OLLAMA_MODELS").unwrap_or_else(|_| "llama3,gemma".to_string());
            let models = parse_model_list(&models_str);
            all_models.extend(models.iter().map(|m| format!("ollama:{}", m)));
            ollama_config = Some(OllamaConfig { api_base, models });
        }

        if all_models.is_empty() {
            return Err(QuizError::Config(
                "No LLM providers configured. Please set GEMINI_API_KEY, OPENAI_API_KEY or OLLAMA_API_BASE.".to_string()
            ));
        }

        let default_model = std::env::var("QUIZGEN_DEFAULT_MODEL")
            .unwrap_or_else(|_| all_models[0].clone());

        let timeout_secs = match std::env::var("QUIZGEN_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                QuizError::Config(format!(
                    "QUIZGEN_REQUEST_TIMEOUT_SECS must be an integer, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 60,
        };

        let bind_addr =
            std::env::var("QUIZGEN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(AppConfig {
            gemini: gemini_config,
            openai: openai_config,
            ollama: ollama_config,
            models: all_models,
            default_model,
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        })
    }
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
