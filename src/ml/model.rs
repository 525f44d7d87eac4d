//! The trained sentiment model: a fitted vectorizer paired with a classifier.

use crate::crypto::hashing::artifact_fingerprint;
use crate::domain::model::Sentiment;
use crate::ml::svm::{LinearSvc, SvcParams};
use crate::ml::tfidf::{TfidfVectorizer, VectorizerOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;
use utoipa::ToSchema;

/// Result of classifying one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub sentiment: Sentiment,
    /// `0.5 ± 0.5 * confidence` depending on polarity.
    pub sentiment_score: f64,
    /// `1 / (1 + |decision|)`. Closer to 1 the nearer the text sits to the boundary.
    pub confidence: f64,
}

/// Maps a label and its confidence onto a score in `[0, 1]`.
pub fn sentiment_score(sentiment: Sentiment, confidence: f64) -> f64 {
    match sentiment {
        Sentiment::Positive => 0.5 + confidence * 0.5,
        Sentiment::Negative => 0.5 - confidence * 0.5,
        Sentiment::Neutral => 0.5,
    }
}

#[derive(Debug, Clone)]
pub struct SentimentModel {
    vectorizer: TfidfVectorizer,
    classifier: LinearSvc,
    fingerprint: String,
}

impl SentimentModel {
    pub fn new(vectorizer: TfidfVectorizer, classifier: LinearSvc) -> Result<Self> {
        let (vec_bytes, clf_bytes) = encode(&vectorizer, &classifier)?;
        Ok(Self {
            vectorizer,
            classifier,
            fingerprint: artifact_fingerprint(&vec_bytes, &clf_bytes),
        })
    }

    /// Fits the vectorizer on `texts` and the classifier on the resulting vectors.
    pub fn train<S: AsRef<str>, L: AsRef<str>>(
        texts: &[S],
        labels: &[L],
        options: VectorizerOptions,
        params: SvcParams,
    ) -> Result<Self> {
        let vectorizer = TfidfVectorizer::fit(texts, options);
        info!(
            documents = texts.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "vectorizer fitted"
        );
        let x = vectorizer.transform_all(texts);
        let classifier = LinearSvc::fit(&x, labels, vectorizer.vocabulary_size(), params)
            .context("Failed to fit linear SVC")?;
        info!(iterations = classifier.n_iter(), "classifier fitted");
        Self::new(vectorizer, classifier)
    }

    /// Classifies `text`. Pure: no I/O and no shared state is touched.
    pub fn predict(&self, text: &str) -> Prediction {
        let x = self.vectorizer.transform(text);
        let decision = self.classifier.decision_function(&x);
        let sentiment = Sentiment::from_label(self.classifier.predict(&x));
        let confidence = 1.0 / (1.0 + decision.abs());
        Prediction {
            sentiment,
            sentiment_score: sentiment_score(sentiment, confidence),
            confidence,
        }
    }

    /// Raw label for `text`, as the classifier names it.
    pub fn predict_label(&self, text: &str) -> &str {
        self.classifier.predict(&self.vectorizer.transform(text))
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Writes the two artifacts, creating parent directories as needed.
    pub fn save(&self, model_path: &Path, vectorizer_path: &Path) -> Result<()> {
        let (vec_bytes, clf_bytes) = encode(&self.vectorizer, &self.classifier)?;
        write_artifact(vectorizer_path, &vec_bytes)?;
        write_artifact(model_path, &clf_bytes)?;
        Ok(())
    }

    pub fn load(model_path: &Path, vectorizer_path: &Path) -> Result<Self> {
        let vec_bytes = fs::read(vectorizer_path).with_context(|| {
            format!("Failed to read vectorizer artifact {}", vectorizer_path.display())
        })?;
        let clf_bytes = fs::read(model_path)
            .with_context(|| format!("Failed to read model artifact {}", model_path.display()))?;

        let vectorizer: TfidfVectorizer = bincode::deserialize(&vec_bytes).with_context(|| {
            format!("Failed to decode vectorizer artifact {}", vectorizer_path.display())
        })?;
        let classifier: LinearSvc = bincode::deserialize(&clf_bytes)
            .with_context(|| format!("Failed to decode model artifact {}", model_path.display()))?;

        vectorizer.validate().with_context(|| {
            format!("Corrupt vectorizer artifact {}", vectorizer_path.display())
        })?;
        anyhow::ensure!(
            classifier.n_features() == vectorizer.vocabulary_size(),
            "model expects {} features but vectorizer produces {}",
            classifier.n_features(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            vectorizer,
            classifier,
            fingerprint: artifact_fingerprint(&vec_bytes, &clf_bytes),
        })
    }
}

fn encode(vectorizer: &TfidfVectorizer, classifier: &LinearSvc) -> Result<(Vec<u8>, Vec<u8>)> {
    let vec_bytes = bincode::serialize(vectorizer).context("Failed to encode vectorizer")?;
    let clf_bytes = bincode::serialize(classifier).context("Failed to encode classifier")?;
    Ok((vec_bytes, clf_bytes))
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
