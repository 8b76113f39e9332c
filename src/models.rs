// src/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quiz complexity level, forwarded verbatim (lowercased) into the
/// generation prompt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// One user submission: the text to quiz on and the requested difficulty.
/// The model string is expected to be in the format `provider:model_name`,
/// e.g. `gemini:gemini-2.5-pro` or `ollama:llama3`. If omitted, the
/// configured default model is used.
#[derive(Debug, Deserialize, Clone)]
pub struct QuizRequest {
    pub source_text: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub model: Option<String>,
}

/// A single multiple-choice question. Only ever built by response parsing,
/// which guarantees exactly four options and an in-range answer index.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

/// A generated quiz. Questions are kept in presentation order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Quiz {
    pub id: String,
    pub difficulty: Difficulty,
    pub model: String,
    pub questions: Vec<QuizQuestion>,
    pub created_at: String,
}

/// The user's selections, question index -> chosen option index.
/// Unanswered questions are simply absent.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AnswerSet {
    pub selections: BTreeMap<usize, usize>,
}

/// Outcome of scoring one `AnswerSet` against one `Quiz`.
/// `per_question_correctness` is index-aligned with `Quiz::questions`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total_count: usize,
    pub per_question_correctness: Vec<bool>,
}
