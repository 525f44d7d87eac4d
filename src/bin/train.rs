// src/bin/train.rs
//
// Offline training pipeline: load → balance → vectorize → fit → evaluate → save.

use anyhow::Result;
use clap::Parser;
use review_sentiment::infra::config;
use review_sentiment::ml::dataset::{self, Sample};
use review_sentiment::ml::metrics::{accuracy, ClassificationReport};
use review_sentiment::ml::tfidf::{DEFAULT_MAX_FEATURES, DEFAULT_NGRAM_RANGE};
use review_sentiment::ml::{SvcParams, VectorizerOptions};
use review_sentiment::SentimentModel;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Train the TF-IDF + linear SVC review sentiment model")]
struct Args {
    /// Training set, JSON Lines of {"text": ..., "label": 0|1}
    #[arg(long)]
    train: PathBuf,

    /// Held-out evaluation set in the same format (used in full)
    #[arg(long)]
    test: Option<PathBuf>,

    /// Samples drawn per class from the training set
    #[arg(long, default_value_t = 50_000)]
    samples_per_class: usize,

    #[arg(long, default_value_t = dataset::DEFAULT_SEED)]
    seed: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
    max_features: usize,

    #[arg(long, default_value_t = 1000)]
    max_iter: usize,

    #[arg(long, env = "SENTIMENT_MODEL_PATH", default_value = config::DEFAULT_MODEL_PATH)]
    model_out: PathBuf,

    #[arg(long, env = "TFIDF_VECTORIZER_PATH", default_value = config::DEFAULT_VECTORIZER_PATH)]
    vectorizer_out: PathBuf,
}

fn evaluate(model: &SentimentModel, samples: &[Sample]) {
    let truth: Vec<&str> = samples.iter().map(|s| s.sentiment.as_str()).collect();
    let predicted: Vec<&str> = samples.iter().map(|s| model.predict_label(&s.text)).collect();
    println!("Accuracy: {:.4}", accuracy(&truth, &predicted));
    println!("{}", ClassificationReport::new(&truth, &predicted));
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let all = dataset::load_jsonl(&args.train)?;
    info!(path = %args.train.display(), samples = all.len(), "training set loaded");

    let sample = dataset::balance(&all, args.samples_per_class, args.seed)?;
    drop(all);
    info!(samples = sample.len(), per_class = args.samples_per_class, "balanced sample drawn");

    let texts: Vec<&str> = sample.iter().map(|s| s.text.as_str()).collect();
    let labels: Vec<&str> = sample.iter().map(|s| s.sentiment.as_str()).collect();
    let options = VectorizerOptions {
        max_features: args.max_features,
        ngram_range: DEFAULT_NGRAM_RANGE,
        stop_words: true,
    };
    let params = SvcParams {
        max_iter: args.max_iter,
        ..SvcParams::default()
    };

    let started = Instant::now();
    let model = SentimentModel::train(&texts, &labels, options, params)?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "Model trained successfully");

    if let Some(test_path) = &args.test {
        let test = dataset::load_jsonl(test_path)?;
        info!(path = %test_path.display(), samples = test.len(), "evaluating");
        evaluate(&model, &test);
    }

    model.save(&args.model_out, &args.vectorizer_out)?;
    info!(
        model = %args.model_out.display(),
        vectorizer = %args.vectorizer_out.display(),
        fingerprint = model.fingerprint(),
        "Model and vectorizer saved"
    );
    Ok(())
}
