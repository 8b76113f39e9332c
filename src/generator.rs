// src/generator.rs
use crate::config::AppConfig;
use crate::errors::{QuizError, Result};
use crate::models::{Difficulty, Quiz, QuizQuestion, QuizRequest};
use crate::providers::{
    LlmProvider, gemini::GeminiProvider, ollama::OllamaProvider, openai::OpenAIProvider,
};
use serde::Deserialize;
use std::collections::HashSet;

/// Number of questions requested from the model. A response with any other
/// count is rejected rather than truncated or padded.
pub const QUESTION_COUNT: usize = 5;

/// Number of options per question.
pub const OPTION_COUNT: usize = 4;

/// Raw wire shape of the model's quiz payload, before validation.
#[derive(Deserialize)]
struct RawQuizPayload {
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_index: usize,
}

/// Builds the generation prompt. The JSON structure is inlined verbatim so
/// the model has a concrete example of the expected payload.
fn build_prompt(source_text: &str, difficulty: Difficulty) -> String {
    format!(
        r#"Text: {source_text}

You are an expert in generating MCQ quizzes based on provided content.
Given the above text, create a quiz of exactly {QUESTION_COUNT} multiple choice questions with a difficulty level of {difficulty}.

Ensure the questions are unique, directly answerable from the text, and appropriate for the difficulty level.

You MUST format your response as a single, valid JSON object. Do not include ANY text, comments, or markdown formatting (like ```json) before or after the JSON object.
Your response must follow this structure precisely:
{{
  "questions": [
    {{"question": "question text", "options": ["choice 1", "choice 2", "choice 3", "choice 4"], "correct_index": 0}}
  ]
}}
Every question must have exactly {OPTION_COUNT} distinct options, and correct_index must be the zero-based index of the correct option."#
    )
}

/// Strips a surrounding markdown code fence (```json ... ``` or ``` ... ```)
/// if the model wrapped its payload in one despite instructions.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses and validates the model's response into quiz questions.
/// Any shape violation fails the whole quiz; nothing is repaired or
/// partially accepted.
fn parse_quiz_payload(raw: &str) -> Result<Vec<QuizQuestion>> {
    let cleaned = strip_code_fences(raw);

    let payload: RawQuizPayload = serde_json::from_str(cleaned)
        .map_err(|e| QuizError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if payload.questions.len() != QUESTION_COUNT {
        return Err(QuizError::MalformedResponse(format!(
            "expected {} questions, got {}",
            QUESTION_COUNT,
            payload.questions.len()
        )));
    }

    let mut questions = Vec::with_capacity(QUESTION_COUNT);
    for (i, q) in payload.questions.into_iter().enumerate() {
        if q.options.len() != OPTION_COUNT {
            return Err(QuizError::MalformedResponse(format!(
                "question {} has {} options, expected {}",
                i + 1,
                q.options.len(),
                OPTION_COUNT
            )));
        }
        if q.correct_index >= OPTION_COUNT {
            return Err(QuizError::MalformedResponse(format!(
                "question {} has correct_index {} out of range",
                i + 1,
                q.correct_index
            )));
        }
        let distinct: HashSet<&str> = q.options.iter().map(|o| o.as_str()).collect();
        if distinct.len() != OPTION_COUNT {
            return Err(QuizError::MalformedResponse(format!(
                "question {} has duplicate options",
                i + 1
            )));
        }
        questions.push(QuizQuestion {
            prompt: q.question,
            options: q.options,
            correct_option_index: q.correct_index,
        });
    }

    Ok(questions)
}

/// Parses a model string like "provider:model_name" and returns the provider and model.
/// Defaults to "gemini" if no provider is specified.
fn parse_model_string(model_str: &str) -> (String, String) {
    match model_str.split_once(':') {
        Some((provider, model)) => (provider.to_string(), model.to_string()),
        None => ("gemini".to_string(), model_str.to_string()),
    }
}

/// Call the appropriate provider based on the provider name
async fn call_provider(
    config: &AppConfig,
    client: &reqwest::Client,
    provider_name: &str,
    model_name: &str,
    prompt: &str,
) -> Result<(String, u64)> {
    match provider_name {
        "gemini" => {
            let gemini_config = config
                .gemini
                .as_ref()
                .ok_or_else(|| QuizError::ProviderNotFound("gemini".to_string()))?;
            let provider = GeminiProvider::new(client.clone(), gemini_config.clone());
            provider.generate(model_name, prompt).await
        }
        "openai" => {
            let openai_config = config
                .openai
                .as_ref()
                .ok_or_else(|| QuizError::ProviderNotFound("openai".to_string()))?;
            let provider = OpenAIProvider::new(client.clone(), openai_config.clone());
            provider.generate(model_name, prompt).await
        }
        "ollama" => {
            let ollama_config = config
                .ollama
                .as_ref()
                .ok_or_else(|| QuizError::ProviderNotFound("ollama".to_string()))?;
            let provider = OllamaProvider::new(client.clone(), ollama_config.clone());
            provider.generate(model_name, prompt).await
        }
        _ => Err(QuizError::ProviderNotFound(provider_name.to_string())),
    }
}

/// Generates a quiz from a request. Validates input before any network
/// call, invokes the configured provider once, and strictly parses the
/// response. No state is retained across calls.
pub async fn generate(
    config: &AppConfig,
    client: &reqwest::Client,
    request: &QuizRequest,
) -> Result<Quiz> {
    let source_text = request.source_text.trim();
    if source_text.is_empty() {
        return Err(QuizError::EmptySourceText);
    }

    let model_str = request
        .model
        .clone()
        .unwrap_or_else(|| config.default_model.clone());
    let (provider_name, model_name) = parse_model_string(&model_str);

    println!("🎯 Generating {} quiz with model: {}", request.difficulty, model_str);

    let prompt = build_prompt(source_text, request.difficulty);

    let (raw_response, latency_ms) =
        call_provider(config, client, &provider_name, &model_name, &prompt).await?;

    println!("✅ Model responded in {}ms", latency_ms);

    let questions = parse_quiz_payload(&raw_response).inspect_err(|e| {
        eprintln!("❌ Rejected quiz payload: {}", e);
        log::debug!("raw quiz payload: {}", raw_response);
    })?;

    Ok(Quiz {
        id: uuid::Uuid::new_v4().to_string(),
        difficulty: request.difficulty,
        model: model_str,
        questions,
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}
