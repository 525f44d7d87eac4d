//! Labelled training data in JSON Lines form.
//!
//! Each non-blank line is `{"text": "...", "label": 0|1}` where `0` is
//! negative and `1` is positive.

use crate::domain::model::Sentiment;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Deserialize)]
struct RawSample {
    text: String,
    label: u8,
}

pub fn parse_line(line: &str) -> Result<Sample> {
    let raw: RawSample = serde_json::from_str(line)?;
    let sentiment = match raw.label {
        0 => Sentiment::Negative,
        1 => Sentiment::Positive,
        other => bail!("label must be 0 or 1, got {}", other),
    };
    Ok(Sample {
        text: raw.text,
        sentiment,
    })
}

pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let sample = parse_line(&line).with_context(|| format!("Malformed sample on line {}", idx + 1))?;
        samples.push(sample);
    }
    Ok(samples)
}

pub fn load_jsonl(path: &Path) -> Result<Vec<Sample>> {
    let file = File::open(path).with_context(|| format!("Failed to open dataset {}", path.display()))?;
    read_jsonl(BufReader::new(file)).with_context(|| format!("Failed to load dataset {}", path.display()))
}

/// Draws `per_class` positive and `per_class` negative samples without
/// replacement, then shuffles the concatenation. Deterministic for a given seed.
pub fn balance(samples: &[Sample], per_class: usize, seed: u64) -> Result<Vec<Sample>> {
    let mut out = Vec::with_capacity(per_class * 2);
    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        let class: Vec<&Sample> = samples.iter().filter(|s| s.sentiment == sentiment).collect();
        if class.len() < per_class {
            bail!(
                "requested {} {} samples but only {} are available",
                per_class,
                sentiment,
                class.len()
            );
        }
        let mut rng = StdRng::seed_from_u64(seed);
        out.extend(class.choose_multiple(&mut rng, per_class).map(|s| (*s).clone()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    out.shuffle(&mut rng);
    Ok(out)
}
