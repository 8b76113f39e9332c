// tests/integration_tests.rs
use actix_web::{App, test, web};
use quizgen::api::{AppState, configure_routes};
use quizgen::config::AppConfig;
use quizgen::errors::QuizError;
use quizgen::generator;
use quizgen::models::{AnswerSet, Difficulty, Quiz, QuizQuestion, QuizRequest};
use quizgen::scoring;
use serde_json::{Value, json};
use std::time::Duration;

/// Config pointing at a closed local port, so any accidental network call
/// fails fast with a transport error instead of hanging.
fn test_config() -> AppConfig {
    AppConfig {
        gemini: Some(quizgen::config::GeminiConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            models: vec!["gemini-2.5-pro".to_string()],
        }),
        openai: None,
        ollama: None,
        models: vec!["gemini:gemini-2.5-pro".to_string()],
        default_model: "gemini:gemini-2.5-pro".to_string(),
        request_timeout: Duration::from_secs(2),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

fn sample_quiz(correct_indices: &[usize]) -> Quiz {
    Quiz {
        id: "11111111-2222-3333-4444-555555555555".to_string(),
        difficulty: Difficulty::Easy,
        model: "gemini:gemini-2.5-pro".to_string(),
        questions: correct_indices
            .iter()
            .enumerate()
            .map(|(i, &correct)| QuizQuestion {
                prompt: format!("Question {}?", i + 1),
                options: vec![
                    format!("answer {}a", i),
                    format!("answer {}b", i),
                    format!("answer {}c", i),
                    format!("answer {}d", i),
                ],
                correct_option_index: correct,
            })
            .collect(),
        created_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn test_empty_source_text_fails_before_any_network_call() {
    let config = test_config();
    let client = reqwest::Client::new();

    for text in ["", "   ", "\n\t  \n"] {
        let request = QuizRequest {
            source_text: text.to_string(),
            difficulty: Difficulty::Hard,
            model: None,
        };
        // The configured api_base is unreachable, so reaching the network
        // would surface a transport error rather than the input error.
        let err = generator::generate(&config, &client, &request)
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::EmptySourceText));
        assert_eq!(err.kind(), "invalid_input");
    }
}

#[tokio::test]
async fn test_unknown_provider_is_rejected() {
    let config = test_config();
    let client = reqwest::Client::new();

    let request = QuizRequest {
        source_text: "The mitochondria is the powerhouse of the cell.".to_string(),
        difficulty: Difficulty::Easy,
        model: Some("anthropic:claude-sonnet".to_string()),
    };
    let err = generator::generate(&config, &client, &request)
        .await
        .unwrap_err();
    assert!(matches!(err, QuizError::ProviderNotFound(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_upstream_unavailable() {
    let config = test_config();
    let client = reqwest::Client::new();

    let request = QuizRequest {
        source_text: "Some perfectly good source text.".to_string(),
        difficulty: Difficulty::Medium,
        model: None,
    };
    let err = generator::generate(&config, &client, &request)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "upstream_unavailable");
}

#[test]
fn test_score_scenario_two_questions() {
    // Keys [1, 2]; selections {0:1, 1:0} -> one right, one wrong.
    let quiz = sample_quiz(&[1, 2]);
    let answers = AnswerSet {
        selections: [(0, 1), (1, 0)].into_iter().collect(),
    };
    let result = scoring::score(&quiz, &answers);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total_count, 2);
    assert_eq!(result.per_question_correctness, vec![true, false]);
}

#[test]
fn test_score_scenario_partially_answered() {
    // Three questions, only the first answered (correctly).
    let quiz = sample_quiz(&[0, 1, 2]);
    let answers = AnswerSet {
        selections: [(0, 0)].into_iter().collect(),
    };
    let result = scoring::score(&quiz, &answers);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total_count, 3);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let state = AppState::new(test_config());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "quizgen-api");
}

#[actix_rt::test]
async fn test_generate_endpoint_rejects_empty_text() {
    let state = AppState::new(test_config());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/quiz")
        .set_json(json!({ "source_text": "   ", "difficulty": "medium" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "invalid_input");
}

#[actix_rt::test]
async fn test_quiz_view_withholds_answer_key() {
    let state = AppState::new(test_config());
    let quiz = sample_quiz(&[1, 2]);
    let quiz_id = quiz.id.clone();
    state.quizzes.write().await.insert(quiz_id.clone(), quiz);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/quiz/{}", quiz_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["quiz_id"], quiz_id.as_str());
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for question in questions {
        assert!(question.get("correct_option_index").is_none());
        assert_eq!(question["options"].as_array().unwrap().len(), 4);
    }
}

#[actix_rt::test]
async fn test_score_endpoint_full_round() {
    let state = AppState::new(test_config());
    let quiz = sample_quiz(&[1, 2]);
    let quiz_id = quiz.id.clone();
    state.quizzes.write().await.insert(quiz_id.clone(), quiz);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/quiz/{}/score", quiz_id))
        .set_json(json!({ "selections": { "0": 1, "1": 0 } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["correct_count"], 1);
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["per_question_correctness"], json!([true, false]));

    // The review reveals the answer key only after submission.
    let review = body["review"].as_array().unwrap();
    assert_eq!(review[0]["correct_option_index"], 1);
    assert_eq!(review[0]["correct"], true);
    assert_eq!(review[1]["selected_option_index"], 0);
    assert_eq!(review[1]["correct"], false);
}

#[actix_rt::test]
async fn test_score_endpoint_rejects_out_of_range_selection() {
    let state = AppState::new(test_config());
    let quiz = sample_quiz(&[1, 2]);
    let quiz_id = quiz.id.clone();
    state.quizzes.write().await.insert(quiz_id.clone(), quiz);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/quiz/{}/score", quiz_id))
        .set_json(json!({ "selections": { "0": 7 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_score_endpoint_unknown_quiz_is_404() {
    let state = AppState::new(test_config());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/quiz/does-not-exist/score")
        .set_json(json!({ "selections": {} }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_models_endpoint_lists_configured_models() {
    let state = AppState::new(test_config());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/models").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["models"], json!(["gemini:gemini-2.5-pro"]));
    assert_eq!(body["default_model"], "gemini:gemini-2.5-pro");
}
