use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

/// Compute the hash of a single file.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file = File::open(path)
        .with_context(|| format!("opening file for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Remembers the content hash of the last plan that was resolved.
///
/// Editors often emit several write events per save, and touching a file
/// without changing it also fires one; neither should re-resolve.
#[derive(Debug, Default)]
pub struct PlanFingerprint {
    last: Option<String>,
}

impl PlanFingerprint {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `hash` and report whether it differs from the previous one.
    pub fn update(&mut self, hash: String) -> bool {
        if self.last.as_deref() == Some(hash.as_str()) {
            debug!(hash = %hash, "plan content unchanged");
            return false;
        }
        self.last = Some(hash);
        true
    }

    /// Hash the file at `path` and [`update`](Self::update) with the result.
    pub fn refresh(&mut self, path: &Path) -> Result<bool> {
        let hash = compute_file_hash(path)?;
        Ok(self.update(hash))
    }
}
