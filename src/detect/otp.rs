//! Time-based one-time passwords over SHA-256.
//!
//! The counter is the Unix time divided into 30-second windows; the
//! code is the first four digest bytes reduced to six decimal digits.

use sha2::{Digest, Sha256};

/// Length of one TOTP window in seconds.
pub const WINDOW_SECONDS: u64 = 30;

/// Number of code digits.
pub const DIGITS: u32 = 6;

/// Computes the six-digit code for a secret at a Unix timestamp.
#[must_use]
pub fn totp(secret: &str, unix_time: u64) -> u32 {
    let counter = unix_time / WINDOW_SECONDS;
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(counter.to_be_bytes());
    let digest = hasher.finalize();

    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    prefix % 10_u32.pow(DIGITS)
}

/// Verifies a code, accepting the current window and the one before it
/// to absorb clock skew.
#[must_use]
pub fn verify_totp(secret: &str, unix_time: u64, code: u32) -> bool {
    if totp(secret, unix_time) == code {
        return true;
    }
    unix_time
        .checked_sub(WINDOW_SECONDS)
        .is_some_and(|previous| totp(secret, previous) == code)
}
