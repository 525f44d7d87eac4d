//! Centralized configuration (environment variables + defaults).

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_PATH: &str = "reviews.json";
pub const DEFAULT_MODEL_PATH: &str = "restaurant_sentiment_model.bin";
pub const DEFAULT_VECTORIZER_PATH: &str = "tfidf_vectorizer.bin";

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the API server binds to (`API_BIND_ADDR`).
pub fn bind_addr() -> Result<SocketAddr> {
    parse_bind_addr(&var_or("API_BIND_ADDR", DEFAULT_BIND_ADDR))
}

pub fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim()
        .parse()
        .with_context(|| format!("API_BIND_ADDR must be a socket address, got '{}'", raw))
}

/// Review datastore file (`REVIEWS_DATA_PATH`).
pub fn data_path() -> PathBuf {
    PathBuf::from(var_or("REVIEWS_DATA_PATH", DEFAULT_DATA_PATH))
}

/// Serialized classifier (`SENTIMENT_MODEL_PATH`).
pub fn model_path() -> PathBuf {
    PathBuf::from(var_or("SENTIMENT_MODEL_PATH", DEFAULT_MODEL_PATH))
}

/// Serialized vectorizer (`TFIDF_VECTORIZER_PATH`).
pub fn vectorizer_path() -> PathBuf {
    PathBuf::from(var_or("TFIDF_VECTORIZER_PATH", DEFAULT_VECTORIZER_PATH))
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: bind_addr()?,
            data_path: data_path(),
            model_path: model_path(),
            vectorizer_path: vectorizer_path(),
        })
    }
}
