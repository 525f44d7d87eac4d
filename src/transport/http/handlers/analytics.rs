use crate::domain::model::{Analytics, CategoryBreakdown, SentimentTrend};
use crate::error::AppError;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Overall counts, percentages and mean rating", body = Analytics),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn analytics_handler(State(state): State<AppState>) -> Result<Json<Analytics>, AppError> {
    Ok(Json(state.service.analytics().await?))
}

#[utoipa::path(
    get,
    path = "/api/sentiment-trend",
    responses(
        (status = 200, description = "Monthly sentiment counts, oldest month first", body = [SentimentTrend]),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn sentiment_trend_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SentimentTrend>>, AppError> {
    Ok(Json(state.service.sentiment_trend().await?))
}

#[utoipa::path(
    get,
    path = "/api/category-breakdown",
    responses(
        (status = 200, description = "Positive vs. non-positive counts per category", body = [CategoryBreakdown]),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn category_breakdown_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryBreakdown>>, AppError> {
    Ok(Json(state.service.category_breakdown().await?))
}
