// src/api/state.rs
use crate::config::AppConfig;
use crate::models::Quiz;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state. Generated quizzes live in an in-process map
/// keyed by quiz id so the answer key never leaves the server; entries
/// last for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Client,
    pub quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            config: Arc::new(config),
            client,
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
