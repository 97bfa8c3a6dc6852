//! Random identifier generation.
//!
//! All generators draw from the thread-local CSPRNG and hold no other state.

use rand::{Rng, distr::Alphanumeric};
use uuid::Uuid;

/// Length used by [`generate_alphanumeric_id`] callers that have no preference.
pub const DEFAULT_ALPHANUMERIC_LEN: usize = 12;

/// Random UUID v4. Its `Display` form is the 36-character hyphenated layout.
pub fn generate_uuid() -> Uuid {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// 32 lowercase hex characters encoding 16 random bytes.
pub fn generate_hex_id() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    const_hex::encode(bytes)
}

/// `size` characters drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_alphanumeric_id(size: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}
