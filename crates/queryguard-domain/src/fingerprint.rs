use sha2::{Digest, Sha256};

/// Stable SHA-256 fingerprint of the exact submitted text, hex encoded.
///
/// Used in logs and reports in place of the query itself.
pub fn query_fingerprint(query_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query_text.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
