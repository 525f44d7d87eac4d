// Content hashing for the serialized model artifacts.

use sha2::{Digest, Sha256};

// Domain separation so the two artifacts cannot be swapped without changing the digest.
const VECTORIZER_DOMAIN: &[u8] = b"TFIDFVEC";
const CLASSIFIER_DOMAIN: &[u8] = b"LINSVC";

/// Hashes both artifact byte streams into one hex-encoded SHA-256 digest.
///
/// The digest identifies the model pair that a server has loaded, so two
/// processes report the same fingerprint only when they predict identically.
pub fn artifact_fingerprint(vectorizer: &[u8], classifier: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(VECTORIZER_DOMAIN);
    hasher.update((vectorizer.len() as u64).to_be_bytes());
    hasher.update(vectorizer);
    hasher.update(CLASSIFIER_DOMAIN);
    hasher.update((classifier.len() as u64).to_be_bytes());
    hasher.update(classifier);
    hex::encode(hasher.finalize())
}
