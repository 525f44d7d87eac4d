//! The review service.
//!
//! This module sits between the HTTP layer and the datastore. It is
//! responsible for:
//! 1.  Classifying review text with the loaded sentiment model.
//! 2.  Validating submissions and turning them into stored `Review` records.
//! 3.  Answering the aggregate queries from the current review set.

use crate::app::analytics;
use crate::domain::model::{
    Analytics, CategoryBreakdown, NewReview, RestaurantWithSummary, Review, SentimentTrend,
};
use crate::error::AppError;
use crate::ml::{Prediction, SentimentModel};
use crate::storage::JsonStore;
use chrono::Local;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct ReviewService {
    store: JsonStore,
    model: Arc<SentimentModel>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

impl ReviewService {
    pub fn new(store: JsonStore, model: Arc<SentimentModel>) -> Self {
        Self { store, model }
    }

    pub fn model(&self) -> &SentimentModel {
        &self.model
    }

    pub fn predict(&self, text: &str) -> Result<Prediction, AppError> {
        if text.is_empty() {
            return Err(AppError::Validation("Text is required".to_string()));
        }
        Ok(self.model.predict(text))
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        Ok(self.store.load().await?.reviews)
    }

    pub async fn reviews_for_restaurant(&self, name: &str) -> Result<Vec<Review>, AppError> {
        let doc = self.store.load().await?;
        Ok(doc
            .reviews
            .into_iter()
            .filter(|r| r.restaurant_name == name)
            .collect())
    }

    /// Validates, classifies and appends a new review, returning the stored record.
    pub async fn add_review(&self, new: NewReview) -> Result<Review, AppError> {
        let customer_name = required(new.customer_name, "customerName")?;
        let restaurant_name = required(new.restaurant_name, "restaurantName")?;
        let rating = required(new.rating, "rating")?;
        let text = required(new.text, "text")?;
        let category = required(new.category, "category")?;

        let prediction = self.model.predict(&text);
        let review = Review {
            id: Uuid::new_v4().to_string(),
            customer_name,
            restaurant_name,
            rating,
            text,
            sentiment: prediction.sentiment,
            sentiment_score: prediction.sentiment_score,
            date: Local::now().date_naive(),
            category,
        };

        self.store.append_review(review.clone()).await?;
        info!(
            id = %review.id,
            restaurant = %review.restaurant_name,
            sentiment = %review.sentiment,
            "review stored"
        );
        Ok(review)
    }

    pub async fn restaurants(&self) -> Result<Vec<RestaurantWithSummary>, AppError> {
        let doc = self.store.load().await?;
        Ok(analytics::restaurant_summaries(&doc.restaurants, &doc.reviews))
    }

    pub async fn analytics(&self) -> Result<Analytics, AppError> {
        Ok(analytics::overall(&self.store.load().await?.reviews))
    }

    pub async fn sentiment_trend(&self) -> Result<Vec<SentimentTrend>, AppError> {
        Ok(analytics::sentiment_trend(&self.store.load().await?.reviews))
    }

    pub async fn category_breakdown(&self) -> Result<Vec<CategoryBreakdown>, AppError> {
        Ok(analytics::category_breakdown(&self.store.load().await?.reviews))
    }
}
