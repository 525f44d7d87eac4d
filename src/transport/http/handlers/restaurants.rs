use crate::domain::model::RestaurantWithSummary;
use crate::error::AppError;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses(
        (status = 200, description = "Restaurants with a sentiment summary computed from current reviews", body = [RestaurantWithSummary]),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantWithSummary>>, AppError> {
    Ok(Json(state.service.restaurants().await?))
}
