use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Sentiment label attached to a review.
///
/// The classifier only ever produces `Positive` or `Negative`. `Neutral`
/// appears in curated records and is counted by every aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Maps a classifier label onto a sentiment. Unrecognized labels are neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored, sentiment-annotated review. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub customer_name: String,
    pub restaurant_name: String,
    pub rating: f64,
    pub text: String,
    pub sentiment: Sentiment,
    /// Polarity strength in `[0, 1]`; `0.5` is undecided.
    pub sentiment_score: f64,
    #[schema(value_type = String, format = Date, example = "2026-02-18")]
    pub date: NaiveDate,
    pub category: String,
}

/// Review submission. Every field is required; they are optional here so a
/// missing one can be reported by name instead of as a parse failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub customer_name: Option<String>,
    pub restaurant_name: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub category: Option<String>,
}
