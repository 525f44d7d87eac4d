//! Sentiment classification: text analysis, TF-IDF features, a linear SVM and
//! the training utilities around them.

pub mod dataset;
pub mod metrics;
pub mod model;
pub mod svm;
pub mod tfidf;
pub mod tokenize;

pub use model::{Prediction, SentimentModel};
pub use svm::{LinearSvc, SvcParams};
pub use tfidf::{SparseVector, TfidfVectorizer, VectorizerOptions};
