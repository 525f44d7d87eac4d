//! End-to-end API test:
//! 1) Train a tiny model in-process and open a fresh seeded datastore.
//! 2) Serve the router on an ephemeral port.
//! 3) Drive every endpoint over HTTP and check the wire contract.

use review_sentiment::ml::{SvcParams, VectorizerOptions};
use review_sentiment::{transport, JsonStore, ReviewService, SentimentModel};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

fn tiny_model() -> SentimentModel {
    let texts = [
        "delicious food and friendly staff",
        "amazing dessert and wonderful view",
        "excellent pasta, lovely wine, great evening",
        "terrible service and cold food",
        "awful smell and rude waiter",
        "horrible soup, dirty tables, disgusting",
    ];
    let labels = ["positive", "positive", "positive", "negative", "negative", "negative"];
    SentimentModel::train(&texts, &labels, VectorizerOptions::default(), SvcParams::default())
        .expect("train tiny model")
}

struct TestServer {
    base_url: String,
    _dir: tempfile::TempDir,
}

async fn start_server() -> Result<TestServer, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = JsonStore::open(dir.path().join("reviews.json")).await?;
    let service = ReviewService::new(store, Arc::new(tiny_model()));
    let router = transport::http::create_router(transport::http::AppState::new(service));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        _dir: dir,
    })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_submit_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let resp = client
        .post(format!("{}/api/reviews", server.base_url))
        .json(&json!({
            "customerName": "Nora V.",
            "restaurantName": "Spice Route",
            "rating": 5,
            "text": "Delicious food and friendly staff, amazing!",
            "category": "Food Quality"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let review: Value = resp.json().await?;

    let id = review["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(review["sentiment"], "positive");
    let score = review["sentimentScore"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
    assert_eq!(
        review["date"].as_str().unwrap(),
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    );
    assert_eq!(review["customerName"], "Nora V.");
    assert_eq!(review["category"], "Food Quality");

    let all: Vec<Value> = client
        .get(format!("{}/api/reviews", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(all.len(), 13);
    assert_eq!(all.last().unwrap()["id"], id);

    let spice: Vec<Value> = client
        .get(format!("{}/api/reviews/Spice%20Route", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(spice.len(), 5);
    assert!(spice.iter().all(|r| r["restaurantName"] == "Spice Route"));

    let analytics: Value = client
        .get(format!("{}/api/analytics", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(analytics["totalReviews"], 13);
    assert_eq!(analytics["positive"], 7);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_validation_errors() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let resp = client
        .post(format!("{}/api/reviews", server.base_url))
        .json(&json!({
            "customerName": "Nora V.",
            "restaurantName": "Spice Route",
            "text": "Nice",
            "category": "Service"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "rating is required");

    let resp = client
        .post(format!("{}/api/predict", server.base_url))
        .json(&json!({ "text": "" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "Text is required");

    let resp = client
        .post(format!("{}/api/predict", server.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/api/reviews", server.base_url))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));

    let all: Vec<Value> = client
        .get(format!("{}/api/reviews", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(all.len(), 12);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_predict_and_health() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let resp = client
        .post(format!("{}/api/predict", server.base_url))
        .json(&json!({ "text": "rude waiter and cold, disgusting soup" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["sentiment"], "negative");
    let confidence = body["confidence"].as_f64().unwrap();
    let score = body["sentimentScore"].as_f64().unwrap();
    assert!(confidence > 0.0 && confidence <= 1.0);
    assert!((score - (0.5 - 0.5 * confidence)).abs() < 1e-9);

    let health: Value = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["model_fingerprint"].as_str().unwrap().len(), 64);
    assert!(health["vocabulary_size"].as_u64().unwrap() > 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cors_allows_any_origin() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let resp = client
        .get(format!("{}/api/restaurants", server.base_url))
        .header("Origin", "http://localhost:3000")
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    // Error responses carry the header too.
    let resp = client
        .post(format!("{}/api/predict", server.base_url))
        .header("Origin", "http://localhost:3000")
        .json(&json!({ "text": "" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/reviews", server.base_url))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;
    assert!(preflight.status().is_success());
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    assert!(preflight.headers().contains_key("access-control-allow-methods"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_aggregates_over_seed_data() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let analytics: Value = client
        .get(format!("{}/api/analytics", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        analytics,
        json!({
            "totalReviews": 12,
            "positive": 6,
            "negative": 3,
            "neutral": 3,
            "positivePercent": 50.0,
            "negativePercent": 25.0,
            "averageRating": 3.6
        })
    );

    let trend: Value = client
        .get(format!("{}/api/sentiment-trend", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        trend,
        json!([{ "month": "2026-02", "positive": 6, "negative": 3, "neutral": 3 }])
    );

    let categories: Vec<Value> = client
        .get(format!("{}/api/category-breakdown", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(categories[0], json!({ "name": "Food Quality", "positive": 3, "negative": 1 }));
    let negatives: u64 = categories.iter().map(|c| c["negative"].as_u64().unwrap()).sum();
    assert_eq!(negatives, 6);

    let restaurants: Vec<Value> = client
        .get(format!("{}/api/restaurants", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(restaurants.len(), 3);
    let ocean = restaurants.iter().find(|r| r["name"] == "Ocean Breeze").unwrap();
    assert_eq!(ocean["cuisine"], "Seafood");
    assert_eq!(ocean["totalReviews"], 156);
    assert_eq!(
        ocean["sentimentSummary"],
        json!({ "positive": 2, "negative": 0, "neutral": 1, "total": 3, "averageRating": 4.3 })
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_are_not_lost() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_server().await?;
    let client = client();

    let mut handles = Vec::new();
    for i in 0..25 {
        let client = client.clone();
        let url = format!("{}/api/reviews", server.base_url);
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({
                    "customerName": format!("guest {}", i),
                    "restaurantName": "Ocean Breeze",
                    "rating": 4,
                    "text": "lovely wine and wonderful view",
                    "category": "Ambiance"
                }))
                .send()
                .await
                .map(|r| r.status().as_u16())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await?.map_err(|e| e.to_string())?, 201);
    }

    let ocean: Vec<Value> = client
        .get(format!("{}/api/reviews/Ocean%20Breeze", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(ocean.len(), 28);
    Ok(())
}
