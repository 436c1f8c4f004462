//! Short code generation.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Generates a short code of `length` hex characters for a destination URL.
///
/// The code is derived from a SHA-256 digest of the URL mixed with a random
/// per-call seed, truncated to `length`. The seed makes repeated calls for
/// the same URL produce different codes, so code uniqueness is best-effort
/// and the caller is expected to retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com/", 6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code(url: &str, length: usize) -> String {
    debug_assert!(length <= Sha256::output_size() * 2);

    let seed: u64 = rand::rng().random();

    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(seed.to_le_bytes());
    let digest = hasher.finalize();

    let mut code = hex::encode(digest);
    code.truncate(length);
    code
}
