use crate::domain::model::{
    Analytics, CategoryBreakdown, NewReview, Restaurant, RestaurantWithSummary, Review, Sentiment,
    SentimentSummary, SentimentTrend,
};
use crate::error::ErrorResponse;
use crate::ml::Prediction;
use crate::transport::http::handlers::{analytics, health, predict, restaurants, reviews};
use crate::transport::http::types::{HealthResponse, PredictRequest};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        predict::predict_handler,
        reviews::list_reviews_handler,
        reviews::restaurant_reviews_handler,
        reviews::add_review_handler,
        restaurants::restaurants_handler,
        analytics::analytics_handler,
        analytics::sentiment_trend_handler,
        analytics::category_breakdown_handler
    ),
    components(schemas(
        HealthResponse,
        PredictRequest,
        Prediction,
        Sentiment,
        Review,
        NewReview,
        Restaurant,
        RestaurantWithSummary,
        SentimentSummary,
        Analytics,
        SentimentTrend,
        CategoryBreakdown,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/predict", post(predict::predict_handler))
        .route(
            "/api/reviews",
            get(reviews::list_reviews_handler).post(reviews::add_review_handler),
        )
        .route(
            "/api/reviews/:restaurant_name",
            get(reviews::restaurant_reviews_handler),
        )
        .route("/api/restaurants", get(restaurants::restaurants_handler))
        .route("/api/analytics", get(analytics::analytics_handler))
        .route("/api/sentiment-trend", get(analytics::sentiment_trend_handler))
        .route(
            "/api/category-breakdown",
            get(analytics::category_breakdown_handler),
        )
        .with_state(app_state)
        .layer(cors_layer())
}

/// Browser frontends are served from other origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
