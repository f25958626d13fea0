use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex digits kept from the path digest.
const ID_LEN: usize = 16;

/// Canonical form of `path` used for id derivation; falls back to the path
/// as given when it cannot be resolved.
pub fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Derive a track id from the full normalized path.
pub fn track_id(path: &Path) -> String {
    let normalized = normalize(path);
    let digest = Sha256::digest(normalized.as_os_str().as_encoded_bytes());

    let mut id = String::with_capacity(ID_LEN);
    for byte in digest.iter().take(ID_LEN / 2) {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}
