use crate::models::PropertyListing;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory of JSON records, one file per pushed listing
pub struct Dataset {
    dir: PathBuf,
    count: usize,
}

impl Dataset {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create dataset directory {}", dir.display()))?;

        Ok(Self { dir, count: 0 })
    }

    /// Write the record as the next numbered file
    pub async fn push_data(&mut self, listing: &PropertyListing) -> Result<PathBuf> {
        self.count += 1;
        let path = self.dir.join(format!("{:09}.json", self.count));

        let json = serde_json::to_string_pretty(listing)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("Saved listing {} to {}", listing.id, path.display());
        Ok(path)
    }

    /// Save all listings together in `listings.json`
    pub async fn write_summary(&self, listings: &[PropertyListing]) -> Result<PathBuf> {
        let path = self.dir.join("listings.json");
        let json = serde_json::to_string_pretty(listings)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("💾 Saved {} listings to {}", listings.len(), path.display());
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.count
    }
}
