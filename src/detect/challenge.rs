//! SHA-256 challenge/response handshake.

use sha2::{Digest, Sha256};

/// Computes the response to a challenge: lowercase hex of
/// `SHA-256(secret || challenge)`.
#[must_use]
pub fn challenge_response(secret: &str, challenge: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(challenge.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Verifies a response against the expected digest.
#[must_use]
pub fn verify_response(secret: &str, challenge: &str, response: &str) -> bool {
    challenge_response(secret, challenge) == response
}
