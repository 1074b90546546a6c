//! The pairwise combine function used for every internal node.

#[cfg(test)]
#[path = "tests/digest.rs"]
mod tests;

use sha2::{Digest, Sha256};

/// Length of a hex encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Combine two child hashes into their parent's hash.
///
/// Formula: hex(SHA-256(left || right)), over the UTF-8 bytes of both strings
/// with no separator. Changing either the algorithm or the operand order
/// breaks compatibility with trees built elsewhere.
#[must_use]
pub fn digest(left: &str, right: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());

    hex::encode(hasher.finalize())
}
