use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted restaurant record. `average_rating` and `total_reviews` are
/// static catalogue values, not derived from the stored reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub average_rating: f64,
    pub total_reviews: u64,
}

/// Review counts for one restaurant, computed on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    /// Mean review rating rounded to one decimal, `0` without reviews.
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithSummary {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub sentiment_summary: SentimentSummary,
}
