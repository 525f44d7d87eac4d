//! TF-IDF feature extraction.

use crate::ml::tokenize::analyze;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MAX_FEATURES: usize = 50_000;
pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (1, 2);

/// Sparse feature vector with strictly increasing indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl SparseVector {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn squared_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .map(|(i, v)| dense.get(i).copied().unwrap_or(0.0) * v)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VectorizerOptions {
    pub max_features: usize,
    pub ngram_range: (usize, usize),
    pub stop_words: bool,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: DEFAULT_NGRAM_RANGE,
            stop_words: true,
        }
    }
}

/// A fitted vocabulary with smoothed inverse document frequencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    options: VectorizerOptions,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and idf weights from `documents`.
    ///
    /// When the corpus has more distinct terms than `max_features`, the terms
    /// with the highest total count are kept, ties going to the
    /// lexicographically smaller term. Indices follow sorted term order.
    pub fn fit<S: AsRef<str>>(documents: &[S], options: VectorizerOptions) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut term_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let mut seen: HashMap<String, usize> = HashMap::new();
            for gram in analyze(doc.as_ref(), options.ngram_range, options.stop_words) {
                *seen.entry(gram).or_insert(0) += 1;
            }
            for (gram, count) in seen {
                *term_freq.entry(gram.clone()).or_insert(0) += count;
                *doc_freq.entry(gram).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        if ranked.len() > options.max_features {
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked.truncate(options.max_features);
        }
        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let df = doc_freq.get(&term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self {
            options,
            vocabulary,
            idf,
        }
    }

    /// Maps `text` to an L2-normalized TF-IDF vector. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for gram in analyze(text, self.options.ngram_range, self.options.stop_words) {
            if let Some(&index) = self.vocabulary.get(&gram) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector {
            indices: Vec::with_capacity(counts.len()),
            values: Vec::with_capacity(counts.len()),
        };
        for (index, count) in counts {
            vector.indices.push(index);
            vector.values.push(count * self.idf[index]);
        }

        let norm = vector.squared_norm().sqrt();
        if norm > 0.0 {
            for v in vector.values.iter_mut() {
                *v /= norm;
            }
        }
        vector
    }

    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.index_of(term).and_then(|i| self.idf.get(i).copied())
    }

    /// Checks that every vocabulary index addresses an idf weight, one term per weight.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.vocabulary.len() == self.idf.len(),
            "vectorizer has {} terms but {} idf weights",
            self.vocabulary.len(),
            self.idf.len()
        );
        let mut seen = vec![false; self.idf.len()];
        for (term, &index) in &self.vocabulary {
            ensure!(
                index < self.idf.len() && !seen[index],
                "vectorizer term '{}' has invalid index {}",
                term,
                index
            );
            seen[index] = true;
        }
        Ok(())
    }
}
