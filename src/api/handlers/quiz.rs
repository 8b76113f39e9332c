// src/api/handlers/quiz.rs
use actix_web::{HttpResponse, Result, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::api::AppState;
use crate::errors::QuizError;
use crate::generator::{self, OPTION_COUNT};
use crate::models::{AnswerSet, Difficulty, Quiz, QuizRequest};
use crate::scoring;

/// Key-free rendering of a quiz. The correct option indices stay on the
/// server until scoring time.
#[derive(Serialize)]
pub struct QuizView {
    pub quiz_id: String,
    pub difficulty: Difficulty,
    pub model: String,
    pub created_at: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        QuizView {
            quiz_id: quiz.id.clone(),
            difficulty: quiz.difficulty,
            model: quiz.model.clone(),
            created_at: quiz.created_at.clone(),
            questions: quiz
                .questions
                .iter()
                .map(|q| QuestionView {
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub selections: BTreeMap<usize, usize>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub quiz_id: String,
    pub correct_count: usize,
    pub total_count: usize,
    pub per_question_correctness: Vec<bool>,
    pub review: Vec<QuestionReview>,
}

/// Per-question breakdown returned once answers are submitted; this is the
/// point where the correct answers are revealed.
#[derive(Serialize)]
pub struct QuestionReview {
    pub prompt: String,
    pub selected_option_index: Option<usize>,
    pub correct_option_index: usize,
    pub correct: bool,
}

fn error_response(err: &QuizError) -> HttpResponse {
    let body = json!({ "error": err.to_string(), "kind": err.kind() });
    match err.kind() {
        "invalid_input" => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::BadGateway().json(body),
    }
}

fn not_found(quiz_id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": format!("quiz '{}' not found", quiz_id),
        "kind": "not_found"
    }))
}

pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: web::Json<QuizRequest>,
) -> Result<HttpResponse> {
    let request = req.into_inner();

    match generator::generate(&state.config, &state.client, &request).await {
        Ok(quiz) => {
            let view = QuizView::from(&quiz);
            state.quizzes.write().await.insert(quiz.id.clone(), quiz);
            Ok(HttpResponse::Ok().json(view))
        }
        Err(e) => {
            log::error!("quiz generation failed: {}", e);
            Ok(error_response(&e))
        }
    }
}

pub async fn get_quiz(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let quiz_id = path.into_inner();
    match state.quizzes.read().await.get(&quiz_id) {
        Some(quiz) => Ok(HttpResponse::Ok().json(QuizView::from(quiz))),
        None => Ok(not_found(&quiz_id)),
    }
}

pub async fn score_quiz(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse> {
    let quiz_id = path.into_inner();
    let quizzes = state.quizzes.read().await;
    let Some(quiz) = quizzes.get(&quiz_id) else {
        return Ok(not_found(&quiz_id));
    };

    // The scoring engine assumes in-range selections; reject violations here.
    let selections = req.into_inner().selections;
    for (&question_index, &option_index) in &selections {
        if question_index >= quiz.questions.len() || option_index >= OPTION_COUNT {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": format!(
                    "selection {}:{} is out of range",
                    question_index, option_index
                ),
                "kind": "invalid_input"
            })));
        }
    }

    let answers = AnswerSet { selections };
    let result = scoring::score(quiz, &answers);

    let review: Vec<QuestionReview> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionReview {
            prompt: q.prompt.clone(),
            selected_option_index: answers.selections.get(&i).copied(),
            correct_option_index: q.correct_option_index,
            correct: result.per_question_correctness[i],
        })
        .collect();

    Ok(HttpResponse::Ok().json(ScoreResponse {
        quiz_id,
        correct_count: result.correct_count,
        total_count: result.total_count,
        per_question_correctness: result.per_question_correctness,
        review,
    }))
}

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub default_model: String,
}

pub async fn get_models(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ModelsResponse {
        models: state.config.models.clone(),
        default_model: state.config.default_model.clone(),
    }))
}
