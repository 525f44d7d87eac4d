// src/bin/predict_console.rs
//
// Interactive check of a trained model: type a review, see the label.

use anyhow::Context;
use clap::Parser;
use review_sentiment::infra::config;
use review_sentiment::SentimentModel;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Classify restaurant reviews typed on stdin")]
struct Args {
    /// Serialized classifier
    #[arg(long, env = "SENTIMENT_MODEL_PATH", default_value = config::DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Serialized TF-IDF vectorizer
    #[arg(long, env = "TFIDF_VECTORIZER_PATH", default_value = config::DEFAULT_VECTORIZER_PATH)]
    vectorizer: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let model = SentimentModel::load(&args.model, &args.vectorizer)?;
    println!("Model loaded successfully!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter a restaurant review (or type 'exit'): ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let review = line.context("Failed to read from stdin")?;
        if review.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let label = model.predict_label(&review.to_lowercase());
        println!("Predicted Sentiment: {}", label);
    }
    Ok(())
}
