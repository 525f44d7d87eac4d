use crate::app::ReviewService;
use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReviewService>,
}

impl AppState {
    pub fn new(service: ReviewService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct PredictRequest {
    /// Review text to classify. Missing and empty are both rejected.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// SHA-256 over the loaded vectorizer and classifier artifacts.
    pub model_fingerprint: String,
    pub vocabulary_size: usize,
}

/// Unwraps a JSON body, turning a rejection into a 400 `AppError`.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(v)| v).map_err(AppError::from)
}
