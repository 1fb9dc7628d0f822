//! Cart snapshot file.
//!
//! Each CLI run restores the cart from this file through the store's replace
//! action, applies one command, and writes the new snapshot back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use turbo_cart::{CartSnapshot, CartStore};

/// On-disk snapshot with a save timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// When the snapshot was written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub snapshot: CartSnapshot,
}

/// Load the store from a snapshot file. A missing file is an empty cart.
pub async fn load_store(path: &Path) -> Result<CartStore> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check cart snapshot: {}", path.display()))?;
    if !exists {
        tracing::debug!(path = %path.display(), "no snapshot, starting with an empty cart");
        return Ok(CartStore::new());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read cart snapshot: {}", path.display()))?;
    let file: SnapshotFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cart snapshot: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        lines = file.snapshot.items.len(),
        saved_at = ?file.saved_at,
        "loaded snapshot"
    );

    let mut store = CartStore::new();
    store.dispatch(file.snapshot.into_action());
    Ok(store)
}

/// Write the store's current state to a snapshot file.
pub async fn save_store(path: &Path, store: &CartStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = SnapshotFile {
        saved_at: Some(Utc::now()),
        snapshot: CartSnapshot::from_state(store.state()),
    };
    let content = serde_json::to_string_pretty(&file)?;

    // The snapshot is only ever replaced by rename, never truncated in place.
    let tmp = staging_path(path);
    tokio::fs::write(&tmp, content)
        .await
        .with_context(|| format!("Failed to write cart snapshot: {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace cart snapshot: {}", path.display()))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
