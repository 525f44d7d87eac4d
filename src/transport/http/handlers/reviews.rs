use crate::domain::model::{NewReview, Review};
use crate::error::AppError;
use crate::transport::http::types::{json_body, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "All stored reviews in insertion order", body = [Review]),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(state.service.list_reviews().await?))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{restaurant_name}",
    params(
        ("restaurant_name" = String, Path, description = "Exact restaurant name (e.g. Spice Route)")
    ),
    responses(
        (status = 200, description = "Reviews for the restaurant, possibly empty", body = [Review]),
        (status = 500, description = "Datastore unreadable", body = crate::error::ErrorResponse)
    )
)]
pub async fn restaurant_reviews_handler(
    State(state): State<AppState>,
    Path(restaurant_name): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(
        state.service.reviews_for_restaurant(&restaurant_name).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "Review classified and stored", body = Review),
        (status = 400, description = "Missing field or invalid JSON body", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_review_handler(
    State(state): State<AppState>,
    request: Result<Json<NewReview>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let new = json_body(request)?;
    let review = state.service.add_review(new).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
