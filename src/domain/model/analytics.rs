use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_reviews: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub average_rating: f64,
}

/// Sentiment counts for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SentimentTrend {
    pub month: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Per-category split. Anything that is not positive counts as negative.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryBreakdown {
    pub name: String,
    pub positive: usize,
    pub negative: usize,
}
