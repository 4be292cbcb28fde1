//! Where the list of channels to export comes from.

use crate::reference::ChannelReference;
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::{Path, PathBuf};

/// One channel to export: a display name for its report sheet, and its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl ChannelEntry {
    pub fn reference(&self) -> ChannelReference {
        ChannelReference::new(self.url.clone())
    }
}

/// Supplies the channels to export, in the order they should be processed.
pub trait ChannelSource {
    fn list_channels(&self) -> impl Future<Output = eyre::Result<Vec<ChannelEntry>>>;
}

/// A JSON file holding an array of `{"name": ..., "url": ...}` objects.
///
/// Like a spreadsheet list, the list ends at the first entry without a URL; anything
/// after it is ignored.
#[derive(Debug, Clone)]
pub struct JsonChannelList {
    path: PathBuf,
}

impl JsonChannelList {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ChannelSource for JsonChannelList {
    async fn list_channels(&self) -> eyre::Result<Vec<ChannelEntry>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read channel list {}", self.path.display()))?;
        let entries: Vec<ChannelEntry> = serde_json::from_str(&json)
            .with_context(|| format!("parse channel list {}", self.path.display()))?;

        let channels: Vec<_> = entries
            .into_iter()
            .take_while(|entry| !entry.url.trim().is_empty())
            .collect();
        tracing::debug!(
            path = %self.path.display(),
            channels = channels.len(),
            "read channel list"
        );
        Ok(channels)
    }
}
