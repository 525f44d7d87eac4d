//! Records stored in the review datastore and the aggregates derived from them.

use serde::{Deserialize, Serialize};

pub mod analytics;
pub mod restaurant;
pub mod review;

pub use analytics::{Analytics, CategoryBreakdown, SentimentTrend};
pub use restaurant::{Restaurant, RestaurantWithSummary, SentimentSummary};
pub use review::{NewReview, Review, Sentiment};

/// The whole datastore document. It is always read and written as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datastore {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}
