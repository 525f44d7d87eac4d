use crate::error::AppError;
use crate::ml::Prediction;
use crate::transport::http::types::{json_body, AppState, PredictRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Predicted sentiment", body = Prediction),
        (status = 400, description = "Missing or empty text, or invalid JSON body", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn predict_handler(
    State(state): State<AppState>,
    request: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    let request = json_body(request)?;
    let text = request.text.unwrap_or_default();
    Ok(Json(state.service.predict(&text)?))
}
