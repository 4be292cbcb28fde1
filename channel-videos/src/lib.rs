use crate::channel_list::ChannelEntry;
use crate::enumerator::Enumerator;
use crate::report::ReportSink;
use crate::resolver::Resolver;
use crate::youtube_api::DataApi;
use tracing::Instrument;

pub mod channel_list;
pub mod config;
pub mod enumerator;
pub mod reference;
pub mod report;
pub mod resolver;
pub mod youtube_api;

/// What happened over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Channels that were attempted.
    pub channels: usize,
    /// Channels whose videos made it into the report.
    pub exported: usize,
    /// Channels left out: unresolvable, without videos, or rejected by the report.
    pub skipped: usize,
    /// Videos across all exported channels.
    pub videos: usize,
}

/// How one channel's export ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Exported { videos: usize },
    Skipped,
}

/// Exports every channel in `channels` to `sink`, one at a time and in order.
///
/// A channel that cannot be resolved, has no videos, or cannot be added to the report is
/// logged and skipped; it never stops the channels after it. The sink is not finished
/// here.
pub async fn export_channels<A, R>(
    resolver: &Resolver<A>,
    enumerator: &Enumerator<A>,
    channels: &[ChannelEntry],
    sink: &mut R,
) -> RunSummary
where
    A: DataApi + Sync,
    R: ReportSink,
{
    let mut summary = RunSummary::default();

    for entry in channels {
        summary.channels += 1;
        let outcome = export_channel(resolver, enumerator, entry, sink)
            .instrument(tracing::info_span!("channel", name = %entry.name))
            .await;
        match outcome {
            Outcome::Exported { videos } => {
                summary.exported += 1;
                summary.videos += videos;
            }
            Outcome::Skipped => summary.skipped += 1,
        }
    }

    summary
}

async fn export_channel<A, R>(
    resolver: &Resolver<A>,
    enumerator: &Enumerator<A>,
    entry: &ChannelEntry,
    sink: &mut R,
) -> Outcome
where
    A: DataApi + Sync,
    R: ReportSink,
{
    tracing::info!(url = %entry.url, "processing");
    let channel_id = match resolver.resolve(&entry.reference()).await {
        Ok(channel_id) => channel_id,
        Err(e) => {
            tracing::warn!("no channel id found: {}", e);
            return Outcome::Skipped;
        }
    };

    let videos = enumerator.enumerate(&channel_id).await;
    if videos.is_empty() {
        tracing::warn!(%channel_id, "no videos found");
        return Outcome::Skipped;
    }

    if let Err(e) = sink.emit(&entry.name, &videos) {
        tracing::error!(%channel_id, "could not add channel to report: {:#}", e);
        return Outcome::Skipped;
    }

    tracing::info!(%channel_id, videos = videos.len(), "exported channel");
    Outcome::Exported {
        videos: videos.len(),
    }
}
