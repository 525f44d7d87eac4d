//! Initial datastore contents written when no datastore file exists yet.

use crate::domain::model::{Datastore, Restaurant, Review, Sentiment};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    customer: &str,
    restaurant: &str,
    rating: f64,
    text: &str,
    sentiment: Sentiment,
    score: f64,
    (y, m, d): (i32, u32, u32),
    category: &str,
) -> Review {
    Review {
        id: id.to_string(),
        customer_name: customer.to_string(),
        restaurant_name: restaurant.to_string(),
        rating,
        text: text.to_string(),
        sentiment,
        sentiment_score: score,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        category: category.to_string(),
    }
}

fn restaurant(id: &str, name: &str, cuisine: &str, average_rating: f64, total_reviews: u64) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        average_rating,
        total_reviews,
    }
}

#[rustfmt::skip]
pub fn seed_datastore() -> Datastore {
    use Sentiment::{Negative, Neutral, Positive};

    let reviews = vec![
        review("1", "Alice M.", "The Golden Fork", 5.0,
            "Absolutely stunning food and ambiance. The truffle pasta was divine!",
            Positive, 0.95, (2026, 2, 18), "Food Quality"),
        review("2", "Bob T.", "The Golden Fork", 2.0,
            "Service was incredibly slow. Waited 45 minutes for appetizers.",
            Negative, 0.15, (2026, 2, 17), "Service"),
        review("3", "Carol S.", "The Golden Fork", 4.0,
            "Great food but the noise level made conversation difficult.",
            Neutral, 0.6, (2026, 2, 16), "Ambiance"),
        review("4", "David L.", "Spice Route", 5.0,
            "Best Indian food I've had outside of India. The butter chicken is phenomenal.",
            Positive, 0.92, (2026, 2, 15), "Food Quality"),
        review("5", "Emma W.", "Spice Route", 1.0,
            "Found a hair in my soup. Management was dismissive about it.",
            Negative, 0.05, (2026, 2, 14), "Hygiene"),
        review("6", "Frank H.", "The Golden Fork", 4.0,
            "Lovely date night spot. Wine selection is impressive.",
            Positive, 0.82, (2026, 2, 13), "Ambiance"),
        review("7", "Grace K.", "Ocean Breeze", 5.0,
            "The freshest seafood in town. Lobster bisque was out of this world!",
            Positive, 0.97, (2026, 2, 12), "Food Quality"),
        review("8", "Henry P.", "Ocean Breeze", 3.0,
            "Food was okay but overpriced for the portion size.",
            Neutral, 0.45, (2026, 2, 11), "Value"),
        review("9", "Irene D.", "Spice Route", 4.0,
            "Warm and welcoming staff. The naan bread was perfectly crispy.",
            Positive, 0.85, (2026, 2, 10), "Service"),
        review("10", "Jack R.", "The Golden Fork", 2.0,
            "Reservation was lost. Had to wait 30 minutes despite booking ahead.",
            Negative, 0.12, (2026, 2, 9), "Service"),
        review("11", "Karen B.", "Ocean Breeze", 5.0,
            "The sunset view paired with amazing sushi. Unforgettable experience!",
            Positive, 0.94, (2026, 2, 8), "Ambiance"),
        review("12", "Leo M.", "Spice Route", 3.0,
            "Decent food but nothing special. Expected more given the hype.",
            Neutral, 0.5, (2026, 2, 7), "Food Quality"),
    ];

    let restaurants = vec![
        restaurant("1", "The Golden Fork", "Italian", 3.8, 234),
        restaurant("2", "Spice Route", "Indian", 4.1, 189),
        restaurant("3", "Ocean Breeze", "Seafood", 4.3, 156),
    ];

    Datastore { reviews, restaurants }
}
