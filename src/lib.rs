pub mod app;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ml;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::ReviewService;
pub use crypto::hashing::artifact_fingerprint;
pub use domain::model::{Review, Sentiment};
pub use error::AppError;
pub use ml::{Prediction, SentimentModel};
pub use storage::JsonStore;
