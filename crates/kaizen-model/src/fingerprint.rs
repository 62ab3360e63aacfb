//! Content fingerprinting for external memoization.
//!
//! Metric values are fully determined by the two normalized tables and the
//! settings, so a cache key must cover exactly those. The core never
//! caches; this helper exists so callers that memoize agree on the key.

use sha2::{Digest, Sha256};

use crate::{ProductTable, ResourceTable, Settings};

/// A stable SHA-256 fingerprint (hex) over the normalized tables and the
/// full settings.
///
/// Identical inputs always produce an identical fingerprint; any change to
/// a cell or to any `Settings` field changes it.
pub fn input_fingerprint(
    products: &ProductTable,
    resources: &ResourceTable,
    settings: &Settings,
) -> String {
    let mut hasher = Sha256::new();
    // JSON serialization of these types is infallible and field-order
    // stable (struct fields, Vec rows).
    for bytes in [
        serde_json::to_vec(products),
        serde_json::to_vec(resources),
        serde_json::to_vec(settings),
    ] {
        hasher.update(bytes.unwrap_or_default());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
