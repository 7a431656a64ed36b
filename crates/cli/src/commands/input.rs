//! Snapshot loading from JSON files.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read and parse a JSON snapshot file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded snapshot");
    Ok(value)
}

/// Explicit timestamp if given, otherwise the system clock.
pub fn resolve_timestamp(explicit: Option<u64>) -> Result<u64> {
    match explicit {
        Some(ts) => Ok(ts),
        None => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("System clock is before the Unix epoch")?;
            Ok(now.as_secs())
        }
    }
}
