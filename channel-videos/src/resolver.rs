//! Turns channel references into canonical channel IDs.

use crate::reference::{ChannelId, ChannelReference, ReferenceKind};
use crate::youtube_api::{ChannelListResponse, DataApi};
use tracing::instrument;

/// Why a reference did not resolve to a channel.
///
/// Neither case is fatal: the channel is skipped and the run carries on.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("not a recognized YouTube channel URL: {0}")]
    InvalidReference(ChannelReference),
    /// The lookup came back empty, or failed.
    #[error("no channel found for {0}")]
    NotFound(ChannelReference),
}

#[derive(Debug, Clone)]
pub struct Resolver<A> {
    api: A,
}

impl<A: DataApi> Resolver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Resolves `reference` to the ID of the channel it names.
    ///
    /// Handles and legacy usernames cost one `channels.list` call each; channel URLs and
    /// bare IDs already contain the ID and are returned without touching the network.
    #[instrument(skip(self, reference), fields(reference = %reference))]
    pub async fn resolve(&self, reference: &ChannelReference) -> Result<ChannelId, ResolveError> {
        let lookup = match reference.kind() {
            ReferenceKind::Handle(handle) => self.api.channels_for_handle(&handle).await,
            ReferenceKind::Username(username) => self.api.channels_for_username(&username).await,
            ReferenceKind::ChannelPath(id) | ReferenceKind::BareId(id) => {
                return Ok(ChannelId::new(id));
            }
            ReferenceKind::Unrecognized => {
                tracing::warn!("unrecognized channel reference");
                return Err(ResolveError::InvalidReference(reference.clone()));
            }
        };

        first_channel_id(lookup).ok_or_else(|| ResolveError::NotFound(reference.clone()))
    }
}

/// The first channel in a lookup response, treating a failed lookup like an empty one.
fn first_channel_id(lookup: eyre::Result<ChannelListResponse>) -> Option<ChannelId> {
    match lookup {
        Ok(channels) => {
            let id = channels.items.into_iter().next().map(|c| ChannelId::new(c.id));
            if id.is_none() {
                tracing::info!("channel lookup returned no items");
            }
            id
        }
        Err(e) => {
            tracing::warn!("channel lookup failed: {:#}", e);
            None
        }
    }
}
