//! Aggregates over the review set. Every function here is pure and is
//! recomputed from the full review list on each request.

use crate::domain::model::{
    Analytics, CategoryBreakdown, Restaurant, RestaurantWithSummary, Review, Sentiment,
    SentimentSummary, SentimentTrend,
};
use std::collections::BTreeMap;

/// Rounds to one decimal place using the exact binary value of `value`.
///
/// Only an exact tie (e.g. `4.25`) goes to the even digit. `0.15` is stored
/// slightly below one half and therefore rounds down to `0.1`.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    if scaled - floor != 0.5 {
        return scaled.round() / 10.0;
    }
    // `scaled` may itself be a rounded product; the fused residual is exact.
    let residual = value.mul_add(10.0, -scaled);
    let rounded = if residual > 0.0 {
        floor + 1.0
    } else if residual < 0.0 || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 10.0
}

fn count(reviews: &[&Review], sentiment: Sentiment) -> usize {
    reviews.iter().filter(|r| r.sentiment == sentiment).count()
}

fn mean_rating(reviews: &[&Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
}

pub fn sentiment_summary(reviews: &[&Review]) -> SentimentSummary {
    if reviews.is_empty() {
        return SentimentSummary::default();
    }
    SentimentSummary {
        positive: count(reviews, Sentiment::Positive),
        negative: count(reviews, Sentiment::Negative),
        neutral: count(reviews, Sentiment::Neutral),
        total: reviews.len(),
        average_rating: round1(mean_rating(reviews)),
    }
}

/// Attaches a summary to each restaurant, matching reviews by exact name.
pub fn restaurant_summaries(
    restaurants: &[Restaurant],
    reviews: &[Review],
) -> Vec<RestaurantWithSummary> {
    restaurants
        .iter()
        .map(|restaurant| {
            let own: Vec<&Review> = reviews
                .iter()
                .filter(|r| r.restaurant_name == restaurant.name)
                .collect();
            RestaurantWithSummary {
                restaurant: restaurant.clone(),
                sentiment_summary: sentiment_summary(&own),
            }
        })
        .collect()
}

pub fn overall(reviews: &[Review]) -> Analytics {
    let all: Vec<&Review> = reviews.iter().collect();
    let total = all.len();
    if total == 0 {
        return Analytics::default();
    }
    let positive = count(&all, Sentiment::Positive);
    let negative = count(&all, Sentiment::Negative);
    let neutral = count(&all, Sentiment::Neutral);
    let percent = |n: usize| round1(n as f64 / total as f64 * 100.0);

    Analytics {
        total_reviews: total,
        positive,
        negative,
        neutral,
        positive_percent: percent(positive),
        negative_percent: percent(negative),
        average_rating: round1(mean_rating(&all)),
    }
}

/// Monthly counts keyed by the `YYYY-MM` prefix of the review date, oldest first.
pub fn sentiment_trend(reviews: &[Review]) -> Vec<SentimentTrend> {
    let mut months: BTreeMap<String, (usize, usize, usize)> = BTreeMap::new();
    for review in reviews {
        let entry = months
            .entry(review.date.format("%Y-%m").to_string())
            .or_default();
        match review.sentiment {
            Sentiment::Positive => entry.0 += 1,
            Sentiment::Negative => entry.1 += 1,
            Sentiment::Neutral => entry.2 += 1,
        }
    }
    months
        .into_iter()
        .map(|(month, (positive, negative, neutral))| SentimentTrend {
            month,
            positive,
            negative,
            neutral,
        })
        .collect()
}

/// Positive versus everything else, per category in first-seen order.
pub fn category_breakdown(reviews: &[Review]) -> Vec<CategoryBreakdown> {
    let mut out: Vec<CategoryBreakdown> = Vec::new();
    for review in reviews {
        let idx = match out.iter().position(|c| c.name == review.category) {
            Some(idx) => idx,
            None => {
                out.push(CategoryBreakdown {
                    name: review.category.clone(),
                    positive: 0,
                    negative: 0,
                });
                out.len() - 1
            }
        };
        if review.sentiment == Sentiment::Positive {
            out[idx].positive += 1;
        } else {
            out[idx].negative += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_datastore;

    #[test]
    fn overall_over_seed_data() {
        let seed = seed_datastore();
        let a = overall(&seed.reviews);
        assert_eq!(a.total_reviews, 12);
        assert_eq!((a.positive, a.negative, a.neutral), (6, 3, 3));
        assert_eq!(a.positive_percent, 50.0);
        assert_eq!(a.negative_percent, 25.0);
        assert_eq!(a.average_rating, 3.6);
    }

    #[test]
    fn overall_without_reviews_is_zero() {
        assert_eq!(overall(&[]), Analytics::default());
    }

    #[test]
    fn restaurant_summaries_over_seed_data() {
        let seed = seed_datastore();
        let rows = restaurant_summaries(&seed.restaurants, &seed.reviews);
        assert_eq!(rows.len(), 3);

        let fork = &rows[0];
        assert_eq!(fork.restaurant.name, "The Golden Fork");
        assert_eq!(fork.sentiment_summary.total, 5);
        assert_eq!(
            (
                fork.sentiment_summary.positive,
                fork.sentiment_summary.negative,
                fork.sentiment_summary.neutral
            ),
            (2, 2, 1)
        );
        // (5 + 2 + 4 + 4 + 2) / 5 = 3.4
        assert_eq!(fork.sentiment_summary.average_rating, 3.4);
        // static catalogue value is untouched
        assert_eq!(fork.restaurant.average_rating, 3.8);
    }

    #[test]
    fn restaurant_without_reviews_has_empty_summary() {
        let seed = seed_datastore();
        let rows = restaurant_summaries(&seed.restaurants, &[]);
        assert!(rows.iter().all(|r| r.sentiment_summary == SentimentSummary::default()));
    }

    #[test]
    fn trend_groups_by_month_in_order() {
        let mut reviews = seed_datastore().reviews;
        let trend = sentiment_trend(&reviews);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, "2026-02");
        assert_eq!((trend[0].positive, trend[0].negative, trend[0].neutral), (6, 3, 3));

        let mut older = reviews[0].clone();
        older.date = chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        reviews.push(older);
        let months: Vec<String> = sentiment_trend(&reviews).into_iter().map(|t| t.month).collect();
        assert_eq!(months, vec!["2025-12", "2026-02"]);
    }

    #[test]
    fn category_breakdown_counts_neutral_as_negative() {
        let seed = seed_datastore();
        let rows = category_breakdown(&seed.reviews);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Food Quality", "Service", "Ambiance", "Hygiene", "Value"]);

        let food = &rows[0];
        assert_eq!((food.positive, food.negative), (3, 1));
        let ambiance = &rows[2];
        assert_eq!((ambiance.positive, ambiance.negative), (2, 1));
        let value = &rows[4];
        assert_eq!((value.positive, value.negative), (0, 1));
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round1(2.25), 2.2);
        assert_eq!(round1(4.25), 4.2);
        assert_eq!(round1(6.25), 6.2);
        assert_eq!(round1(4.75), 4.8);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 0.15 and 0.35 are stored just below the half, 0.45 just above.
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(0.45), 0.5);
        assert_eq!(round1(3.5833), 3.6);
        assert_eq!(round1(43.0 / 12.0), 3.6);
    }

    #[test]
    fn four_review_restaurant_average_rounds_to_even() {
        let mut reviews: Vec<Review> = seed_datastore()
            .reviews
            .into_iter()
            .filter(|r| r.restaurant_name == "Spice Route")
            .collect();
        for (review, rating) in reviews.iter_mut().zip([5.0, 4.0, 4.0, 4.0]) {
            review.rating = rating;
        }
        assert_eq!(reviews.len(), 4);
        assert_eq!(overall(&reviews).average_rating, 4.2);

        let seed = seed_datastore();
        let rows = restaurant_summaries(&seed.restaurants[1..2], &reviews);
        assert_eq!(rows[0].sentiment_summary.average_rating, 4.2);
    }

    #[test]
    fn one_in_sixteen_percent_rounds_to_even() {
        let mut reviews = seed_datastore().reviews;
        reviews.extend(seed_datastore().reviews.into_iter().take(4));
        for review in reviews.iter_mut() {
            review.sentiment = Sentiment::Neutral;
        }
        reviews[0].sentiment = Sentiment::Positive;
        assert_eq!(reviews.len(), 16);
        assert_eq!(overall(&reviews).positive_percent, 6.2);
    }
}
