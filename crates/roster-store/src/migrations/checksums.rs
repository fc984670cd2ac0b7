//! Checksums for migration SQL
//!
//! Line endings are normalized first so a CRLF checkout of the same file
//! produces the same digest.

use sha2::{Digest, Sha256};

/// Compute the SHA256 checksum of migration SQL as lowercase hex
pub fn compute_checksum(sql: &str) -> String {
    let normalized = sql.replace("\r\n", "\n");
    hex::encode(Sha256::digest(normalized.as_bytes()))
}
